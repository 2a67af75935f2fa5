mod test_round_trip;
mod test_individual_link_positions;

#[cfg(feature = "allow_filesystem")]
mod test_from_yaml;
