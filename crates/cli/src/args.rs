use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// An .obj or .off file.
    pub path: PathBuf,

    /// Also compute per-vertex normals.
    #[arg(long)]
    pub vertex_normals: bool,

    /// Keep positions as they appear in the file instead of centering and rescaling them.
    #[arg(long)]
    pub raw: bool,

    /// Build the edge list instead of reporting the count declared by the file.
    #[arg(long)]
    pub edges: bool,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// An .obj or .off file.
    pub input: PathBuf,

    /// Output path for the .off file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Keep positions as they appear in the file instead of centering and rescaling them.
    #[arg(long)]
    pub raw: bool,

    /// Scale factors applied first.
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub scale: Option<Vec<f32>>,

    /// Rotation in degrees around an axis, applied after scaling.
    #[arg(long, num_args = 4, value_names = ["DEG", "X", "Y", "Z"], allow_negative_numbers = true)]
    pub rotate: Option<Vec<f32>>,

    /// Offset applied last.
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub translate: Option<Vec<f32>>,
}

#[derive(clap::Args, Debug)]
pub struct IndexArgs {
    /// An .obj or .off file.
    pub path: PathBuf,

    /// Merge identical corners into shared vertices.
    #[arg(long)]
    pub dedup: bool,

    /// Use smoothed per-vertex normals.
    #[arg(long)]
    pub vertex_normals: bool,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print counts, centroid and extent of a mesh.
    Info(InfoArgs),
    /// Transform a mesh and write it as OFF.
    Convert(ConvertArgs),
    /// Build a render buffer and print its size.
    Index(IndexArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_convert_with_transforms() {
        let args = Args::try_parse_from([
            "lathe",
            "convert",
            "in.obj",
            "-o",
            "out.off",
            "--scale",
            "2",
            "2",
            "2",
            "--rotate",
            "90",
            "0",
            "-1",
            "0",
            "--translate",
            "-1.5",
            "0",
            "3",
        ])
        .unwrap();
        let Commands::Convert(convert) = args.command else {
            panic!("expected convert");
        };
        assert_eq!(convert.output, PathBuf::from("out.off"));
        assert_eq!(convert.scale, Some(vec![2.0, 2.0, 2.0]));
        assert_eq!(convert.rotate, Some(vec![90.0, 0.0, -1.0, 0.0]));
        assert_eq!(convert.translate, Some(vec![-1.5, 0.0, 3.0]));
        assert!(!convert.raw);
    }

    #[test]
    fn parse_info_flags() {
        let args =
            Args::try_parse_from(["lathe", "info", "cube.off", "--raw", "--edges"]).unwrap();
        let Commands::Info(info) = args.command else {
            panic!("expected info");
        };
        assert!(info.raw);
        assert!(info.edges);
        assert!(!info.vertex_normals);
    }

    #[test]
    fn rotate_needs_four_values() {
        assert!(Args::try_parse_from([
            "lathe", "convert", "in.obj", "-o", "out.off", "--rotate", "90", "0", "1"
        ])
        .is_err());
    }
}
