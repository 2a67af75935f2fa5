use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rs_planar_kinematics::animation::Animation;
use rs_planar_kinematics::kinematic_traits::{BranchPolicy, ElbowBranch, Joints, Kinematics, Pose};
use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
use rs_planar_kinematics::marker::EndEffectorMarker;
use rs_planar_kinematics::motion::JointMotion;
use rs_planar_kinematics::parameters::planar_kinematics::LinkLengths;
use rs_planar_kinematics::parameters_from_file::poses_from_yaml_file;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Forward and inverse kinematics of the 3-link planar arm.
#[derive(Parser, Debug)]
#[command(name = "planar-arm", version)]
struct Cli {
    /// YAML file with planar_arm_link_lengths. The demo arm (3, 2, 1.2) is used if not given.
    #[arg(long, global = true)]
    arm: Option<PathBuf>,

    /// Angles are given and printed in degrees rather than radians.
    #[arg(long, global = true)]
    degrees: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Joint angles for the end-effector pose
    Ik {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        orientation: f64,
        #[arg(long, value_enum, default_value_t = Branch::PositiveShoulder)]
        branch: Branch,
        /// Print both elbow branches
        #[arg(long)]
        all: bool,
    },
    /// Joint positions for the joint angles
    Fk {
        #[arg(long, allow_hyphen_values = true)]
        theta1: f64,
        #[arg(long, allow_hyphen_values = true)]
        theta2: f64,
        #[arg(long, allow_hyphen_values = true)]
        theta3: f64,
    },
    /// Timed frames of the smooth motion between two poses, given as x,y,orientation
    Trajectory {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_triple, required_unless_present = "poses")]
        from: Option<[f64; 3]>,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_triple, required_unless_present = "poses")]
        to: Option<[f64; 3]>,
        /// YAML file with poses; the first two are used as start and end
        #[arg(long, conflicts_with_all = ["from", "to"])]
        poses: Option<PathBuf>,
        #[arg(long, default_value_t = 50)]
        steps: usize,
        /// Display interval between frames
        #[arg(long, default_value_t = 50)]
        interval_ms: u64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Branch {
    PositiveShoulder,
    Down,
    Up,
}

impl From<Branch> for BranchPolicy {
    fn from(branch: Branch) -> Self {
        match branch {
            Branch::PositiveShoulder => BranchPolicy::PreferPositiveShoulder,
            Branch::Down => BranchPolicy::Fixed(ElbowBranch::Down),
            Branch::Up => BranchPolicy::Fixed(ElbowBranch::Up),
        }
    }
}

fn parse_triple(text: &str) -> Result<[f64; 3], String> {
    let values: Vec<f64> = text
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("{}: {}", v, e)))
        .collect::<Result<_, _>>()?;
    <[f64; 3]>::try_from(values)
        .map_err(|v| format!("expected x,y,orientation, got {} values", v.len()))
}

fn load_links(cli: &Cli) -> Result<LinkLengths> {
    match &cli.arm {
        Some(path) => LinkLengths::from_yaml_file(path)
            .with_context(|| format!("Failed to read the arm from {}", path.display())),
        None => Ok(LinkLengths::demo_arm()),
    }
}

fn angle_in(cli: &Cli, value: f64) -> f64 {
    if cli.degrees { value.to_radians() } else { value }
}

fn pose_in(cli: &Cli, [x, y, orientation]: [f64; 3]) -> Pose {
    Pose::new(x, y, angle_in(cli, orientation))
}

fn format_joints(cli: &Cli, joints: &Joints) -> String {
    let values: Vec<String> = joints
        .iter()
        .map(|q| if cli.degrees { q.to_degrees() } else { *q })
        .map(|q| format!("{:.4}", q))
        .collect();
    format!("[{}]", values.join(", "))
}

fn format_points<'a>(points: impl IntoIterator<Item = &'a nalgebra::Point2<f64>>) -> String {
    let points: Vec<String> = points
        .into_iter()
        .map(|p| format!("({:.4}, {:.4})", p.x, p.y))
        .collect();
    points.join(" ")
}

/// Executes the command, returning the lines to print.
fn run(cli: &Cli) -> Result<Vec<String>> {
    let links = load_links(cli)?;
    info!("Arm link lengths {:?}, reach {}", links.as_array(), links.max_reach());

    match &cli.command {
        Command::Ik { x, y, orientation, branch, all } => {
            let robot = PlanarKinematics::new_with_policy(links, (*branch).into());
            let pose = pose_in(cli, [*x, *y, *orientation]);
            if *all {
                let solutions = robot
                    .inverse_solutions(&pose)
                    .with_context(|| format!("Pose {:?} cannot be solved", pose))?;
                Ok(solutions.iter().map(|s| format_joints(cli, s)).collect())
            } else {
                let joints = robot
                    .inverse(&pose)
                    .with_context(|| format!("Pose {:?} cannot be solved", pose))?;
                Ok(vec![format_joints(cli, &joints)])
            }
        }
        Command::Fk { theta1, theta2, theta3 } => {
            let robot = PlanarKinematics::new(links);
            let joints = [theta1, theta2, theta3].map(|q| angle_in(cli, *q));
            let positions = robot.forward_with_joint_positions(&joints);
            let pose = robot.forward(&joints);
            Ok(vec![
                format_points(&positions),
                format!(
                    "orientation {:.4}",
                    if cli.degrees { pose.orientation.to_degrees() } else { pose.orientation }
                ),
            ])
        }
        Command::Trajectory { from, to, poses, steps, interval_ms } => {
            let robot = PlanarKinematics::new(links);
            let (start, end) = match (poses, from, to) {
                (Some(path), _, _) => {
                    let poses = poses_from_yaml_file(path)
                        .with_context(|| format!("Failed to read poses from {}", path.display()))?;
                    if poses.len() < 2 {
                        bail!("{} must contain at least two poses", path.display());
                    }
                    (poses[0], poses[1])
                }
                (None, Some(from), Some(to)) => (pose_in(cli, *from), pose_in(cli, *to)),
                _ => bail!("either --poses or both --from and --to are required"),
            };
            debug!("Trajectory {:?} -> {:?}", start, end);

            let motion = JointMotion::plan(&robot, &start, &end, *steps)
                .context("Motion cannot be planned")?;
            let animation = Animation::new(
                Duration::from_millis(*interval_ms),
                EndEffectorMarker::default(),
            )?;

            Ok(animation
                .frames(&robot, motion.trajectory())
                .map(|frame| {
                    format!(
                        "{:>8.3}s {} {}",
                        frame.time.as_secs_f64(),
                        format_joints(cli, &frame.joints),
                        format_points(&frame.positions)
                    )
                })
                .collect())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
