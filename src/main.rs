use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use num_complex::Complex64;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zeta_machine::color::ColorMode;
use zeta_machine::config::{default_lut_specs, default_params, LutSpec, RenderParams};
use zeta_machine::error::{Result, ZetaError};
use zeta_machine::io::bitmap::ImageCrateSource;
use zeta_machine::io::png::save_rgb;
use zeta_machine::io::stream;
use zeta_machine::lut::LutChain;
use zeta_machine::render::{self, Patch};
use zeta_machine::zeta;

/// Rendu de la fonction zêta de Riemann sur une fenêtre du plan complexe.
///
/// Exemple d'utilisation :
///   zeta-cli --xmin -30 --xmax 30 --ymin -30 --ymax 30 --width 1024 --height 1024 --output zeta.png
#[derive(Parser, Debug)]
#[command(
    name = "zeta-cli",
    about = "Rendu de ζ(s) en coloration de domaine ou en nombre d'itérations",
    version
)]
struct Cli {
    /// Fichier de configuration JSON (les options ci-dessous le surchargent)
    #[arg(long, value_name = "FICHIER")]
    config: Option<PathBuf>,

    /// Largeur de l'image de sortie en pixels
    #[arg(long)]
    width: Option<u32>,

    /// Hauteur de l'image de sortie en pixels
    #[arg(long)]
    height: Option<u32>,

    /// Partie réelle minimale de la fenêtre
    #[arg(long, allow_hyphen_values = true)]
    xmin: Option<f64>,

    /// Partie réelle maximale de la fenêtre
    #[arg(long, allow_hyphen_values = true)]
    xmax: Option<f64>,

    /// Partie imaginaire minimale de la fenêtre
    #[arg(long, allow_hyphen_values = true)]
    ymin: Option<f64>,

    /// Partie imaginaire maximale de la fenêtre
    #[arg(long, allow_hyphen_values = true)]
    ymax: Option<f64>,

    /// Mode de colorisation (domain, iterations, grayscale)
    #[arg(long)]
    mode: Option<String>,

    /// Tolérance de convergence de l'itération
    #[arg(long)]
    epsilon: Option<f64>,

    /// Nombre maximal d'évaluations de ζ par pixel
    #[arg(long)]
    max_its: Option<u32>,

    /// Module d'échappement
    #[arg(long)]
    cabs_z_max: Option<f64>,

    /// Table de correspondance CHEMIN:RMIN,RMAX,IMIN,IMAX,RES (répétable)
    #[arg(long = "lut", value_name = "SPEC", allow_hyphen_values = true)]
    luts: Vec<String>,

    /// Répertoire contenant les six tables de référence CL*.bmp
    #[arg(long, value_name = "REPERTOIRE")]
    lut_dir: Option<PathBuf>,

    /// Affiche la suite des itérés depuis RE,IM puis quitte
    #[arg(long, value_name = "RE,IM", allow_hyphen_values = true)]
    trace: Option<String>,

    /// Sert des requêtes de rendu sur stdin/stdout
    #[arg(long)]
    stream: bool,

    /// Écrit en JSON la grille SIZE x SIZE des nombres d'itérations bruts
    #[arg(long, value_name = "SIZE")]
    patch: Option<u32>,

    /// Fichier de sortie (format déduit de l'extension)
    #[arg(long, value_name = "FICHIER")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let params = build_params(&cli)?;

    if let Some(point) = &cli.trace {
        return print_trace(point, &params);
    }

    // Construction séquentielle de la chaîne, avant toute phase parallèle.
    let mut chain = LutChain::new();
    for spec in &params.luts {
        chain.load_and_insert(spec.settings, &spec.path, &ImageCrateSource)?;
    }
    if !chain.is_empty() {
        info!("{} table(s) chargée(s), ordre {:?}", chain.len(), chain.resolutions());
    }
    let view = (!chain.is_empty()).then(|| chain.view());

    if cli.stream {
        let stdin = std::io::stdin();
        let served = stream::serve(stdin.lock(), std::io::stdout().lock(), &params, view)?;
        info!("{served} requête(s) servie(s)");
        return Ok(());
    }

    let output = cli
        .output
        .as_ref()
        .ok_or_else(|| ZetaError::Config("--output est requis pour un rendu".into()))?;

    if let Some(size) = cli.patch {
        let patch = Patch::compute(params.window.min, params.window.max, size, &params.zeta)?;
        return patch.save_json(output);
    }

    let buffer = render::render(&params, view)?;
    save_rgb(params.width, params.height, buffer, output)
}

fn build_params(cli: &Cli) -> Result<RenderParams> {
    let mut params = match &cli.config {
        Some(path) => RenderParams::from_json_file(path)?,
        None => default_params(1024, 1024),
    };

    if let Some(width) = cli.width {
        params.width = width;
    }
    if let Some(height) = cli.height {
        params.height = height;
    }
    if let Some(xmin) = cli.xmin {
        params.window.min.re = xmin;
    }
    if let Some(xmax) = cli.xmax {
        params.window.max.re = xmax;
    }
    if let Some(ymin) = cli.ymin {
        params.window.min.im = ymin;
    }
    if let Some(ymax) = cli.ymax {
        params.window.max.im = ymax;
    }
    if let Some(mode) = &cli.mode {
        params.color_mode = ColorMode::from_cli_name(mode).ok_or_else(|| {
            ZetaError::Config(format!(
                "mode invalide: '{mode}'. Options: domain, iterations, grayscale"
            ))
        })?;
    }
    if let Some(epsilon) = cli.epsilon {
        params.zeta.epsilon = epsilon;
    }
    if let Some(max_its) = cli.max_its {
        params.zeta.max_its = max_its;
    }
    if let Some(cabs_z_max) = cli.cabs_z_max {
        params.zeta.cabs_z_max = cabs_z_max;
    }

    // Les tables de référence d'abord, puis celles passées explicitement.
    if let Some(dir) = &cli.lut_dir {
        params.luts.extend(default_lut_specs(dir));
    }
    for spec in &cli.luts {
        params.luts.push(LutSpec::parse(spec)?);
    }

    params.validate()?;
    Ok(params)
}

fn print_trace(point: &str, params: &RenderParams) -> Result<()> {
    let parts: Vec<&str> = point.split(',').map(str::trim).collect();
    let parsed = match parts.as_slice() {
        [re, im] => re.parse::<f64>().ok().zip(im.parse::<f64>().ok()),
        _ => None,
    };
    let (re, im) = parsed.ok_or_else(|| ZetaError::Config(format!("point invalide: '{point}', attendu RE,IM")))?;
    let s = Complex64::new(re, im);

    let orbit = zeta::trace(s, params.zeta.epsilon, &params.zeta);
    for (i, z) in orbit.iter().enumerate() {
        println!("{i:>5}: {} {:+}i", z.re, z.im);
    }
    let report = zeta::iterate_with(s, params.zeta.epsilon, &params.zeta);
    println!(
        "iterations: {} ({}), dernière valeur {}",
        report.count,
        report.outcome.name(),
        report.last
    );
    Ok(())
}
