use anyhow::Context as _;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

use imagen::{BatchRequest, DefinitionMode, FontProvider};

#[derive(Parser, Debug)]
#[command(name = "imagen", version, about = "Placeholder image generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one image per round x size x background definition.
    Generate(GenerateArgs),
    /// Serve images described by the request path over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Image size WxH (repeatable).
    #[arg(short = 's', long = "size")]
    sizes: Vec<String>,

    /// Solid background: color[:t:textcolor] (repeatable).
    #[arg(short = 'c', long = "color")]
    colors: Vec<String>,

    /// Gradient: color1,color2[,...][:angle][:t:textcolor] (repeatable).
    #[arg(short = 'g', long = "gradient")]
    gradients: Vec<String>,

    /// Tiles: color1,color2[,...][:tilesize][:t:textcolor] (repeatable).
    #[arg(short = 't', long = "tiles")]
    tiles: Vec<String>,

    /// Noise: color1,color2[,...][:tilesize][:t:textcolor] (repeatable).
    #[arg(short = 'n', long = "noise")]
    noise: Vec<String>,

    /// Border: width,color.
    #[arg(short = 'b', long)]
    border: Option<String>,

    /// Text to display; {w} and {h} are replaced with the size.
    #[arg(long, default_value = "{w}x{h}")]
    text: String,

    /// Text size in pt.
    #[arg(long, default_value_t = 20.0)]
    text_size: f64,

    /// Default text color.
    #[arg(long)]
    text_color: Option<String>,

    /// Text angle in degrees (recorded, drawn unrotated).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    text_angle: f64,

    /// Output filename; supports {w}, {h} and {nr}.
    #[arg(short = 'f', long, default_value = "image.png")]
    filename: String,

    /// Output format (png, jpeg).
    #[arg(long, default_value = "png")]
    format: String,

    /// Number of runs.
    #[arg(short = 'r', long = "nr", default_value_t = 1)]
    rounds: u32,

    /// Seed for every random draw.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the planned images as JSON lines without rendering.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Comma-separated listen addresses; ":port" listens on all interfaces.
    #[arg(long, default_value = ":3000")]
    listen: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagen=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    match cli.cmd {
        Command::Generate(args) => {
            let sub = matches
                .subcommand_matches("generate")
                .context("generate arguments missing")?;
            cmd_generate(args, sub)
        }
        Command::Serve(args) => cmd_serve(args),
    }
}

/// Background flags in command-line order, across all four modes.
fn ordered_definitions(args: &GenerateArgs, matches: &ArgMatches) -> Vec<(DefinitionMode, String)> {
    let groups = [
        ("colors", DefinitionMode::Solid, &args.colors),
        ("gradients", DefinitionMode::Gradient, &args.gradients),
        ("tiles", DefinitionMode::Tiled, &args.tiles),
        ("noise", DefinitionMode::Noise, &args.noise),
    ];
    let mut defs: Vec<(usize, DefinitionMode, String)> = Vec::new();
    for (id, mode, values) in groups {
        let indices = matches.indices_of(id).into_iter().flatten();
        for (index, value) in indices.zip(values.iter()) {
            defs.push((index, mode, value.clone()));
        }
    }
    defs.sort_by_key(|(index, _, _)| *index);
    defs.into_iter().map(|(_, mode, value)| (mode, value)).collect()
}

fn cmd_generate(args: GenerateArgs, matches: &ArgMatches) -> anyhow::Result<()> {
    let definitions = ordered_definitions(&args, matches);
    let request = BatchRequest {
        sizes: args.sizes,
        definitions,
        border: args.border,
        text: args.text,
        text_size: args.text_size,
        text_color: args.text_color,
        text_angle: args.text_angle,
        filename: args.filename,
        format: args.format,
        rounds: args.rounds,
    };

    if args.dry_run {
        for item in request.plan()? {
            println!("{}", serde_json::to_string(&item)?);
        }
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let fonts = FontProvider::system();
    imagen::run_batch(&request, &mut rng, &fonts, |img| {
        println!(
            "Generated: {} ({}x{}, {})",
            img.path.display(),
            img.width,
            img.height,
            img.mode
        );
    })?;
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let addrs: Vec<String> = args
        .listen
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_owned)
        .collect();
    if addrs.is_empty() {
        anyhow::bail!("no listen address given");
    }

    let fonts = FontProvider::system();
    tracing::info!(font = %fonts.face().describe(), "font selected");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(imagen::serve(&addrs, fonts))?;
    Ok(())
}
