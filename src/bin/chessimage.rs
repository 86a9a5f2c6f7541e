use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chess_image::{DirectoryAssets, FilterType, LastMove, Options, Renderer, Tile};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{error, info};

const DEMO_FEN: &str = "rnbqkbnr/ppppp2p/5p2/6pQ/3PP3/8/PPP2PPP/RNB1KBNR b KQkq - 1 3";

#[derive(Parser)]
#[command(name = "chessimage", version, about = "Render a FEN position to a PNG board")]
struct Cli {
    /// Forsyth-Edwards Notation of the position
    #[arg(long, default_value = DEMO_FEN)]
    fen: String,

    /// Output path for the board PNG
    #[arg(short, long, default_value = "board.png")]
    output: PathBuf,

    /// Board side in pixels
    #[arg(long, default_value_t = chess_image::render::DEFAULT_BOARD_SIZE)]
    size: u32,

    /// Piece size relative to a board cell
    #[arg(long, default_value_t = chess_image::render::DEFAULT_PIECE_RATIO)]
    ratio: f64,

    /// Sprite scaling filter
    #[arg(long, value_enum, default_value_t = Resampler::CatmullRom)]
    resampler: Resampler,

    /// Draw the board from Black's side
    #[arg(long)]
    inverted: bool,

    /// Directory to read piece sprites from instead of the built-in set
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Prefix joined in front of each sprite file name
    #[arg(long, default_value = "")]
    asset_path: String,

    /// Tile to highlight as in check (e.g. e8)
    #[arg(long, value_parser = parse_tile)]
    check: Option<Tile>,

    /// Tiles of the last move (e.g. --last-move d1 h5)
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"], value_parser = parse_tile)]
    last_move: Option<Vec<Tile>>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Resampler {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Resampler> for FilterType {
    fn from(resampler: Resampler) -> Self {
        match resampler {
            Resampler::Nearest => FilterType::Nearest,
            Resampler::Triangle => FilterType::Triangle,
            Resampler::CatmullRom => FilterType::CatmullRom,
            Resampler::Gaussian => FilterType::Gaussian,
            Resampler::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn parse_tile(s: &str) -> Result<Tile, String> {
    Tile::from_algebraic(s).map_err(|err| err.to_string())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut renderer = Renderer::from_fen(&cli.fen)?;

    if let Some(tile) = cli.check {
        renderer.set_check_tile(tile);
    }
    if let Some([from, to]) = cli.last_move.as_deref() {
        renderer.set_last_move(LastMove::new(*from, *to));
    }
    if cli.fen == DEMO_FEN && cli.check.is_none() && cli.last_move.is_none() {
        renderer.set_last_move(LastMove::new(Tile::D1, Tile::H5));
        renderer.set_check_tile(Tile::E8);
    }

    let mut options = Options::new()
        .with_board_size(cli.size)
        .with_piece_ratio(cli.ratio)
        .with_resampler(cli.resampler.into())
        .with_inverted(cli.inverted)
        .with_asset_path(cli.asset_path);
    if let Some(dir) = cli.assets {
        options = options.with_asset_source(Arc::new(DirectoryAssets::new(dir)));
    }

    let png = renderer.render_png(&options)?;
    std::fs::write(&cli.output, png)?;
    info!("wrote {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let env = Env::default().filter_or("CHESSIMAGE_LOG", "info");
    env_logger::Builder::from_env(env).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
