use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use texpack::io::listing::list_dir;
use texpack::{PackParams, pack_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(enabled: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if enabled => EnvFilter::new("debug"),
        Err(_) => return,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Defaults, then the preset file, then any explicit flags.
pub fn resolve_params(args: &CliArgs) -> Result<PackParams, AppError> {
    let mut params = match &args.config {
        Some(path) => PackParams::load_preset(path)?,
        None => PackParams::default(),
    };

    if let Some(red) = &args.red {
        params.inputs.red = red.clone();
    }
    if let Some(green) = &args.green {
        params.inputs.green = green.clone();
    }
    if let Some(blue) = &args.blue {
        params.inputs.blue = blue.clone();
    }
    if let Some(alpha) = &args.alpha {
        params.inputs.alpha = alpha.clone();
    }
    if let Some(output) = &args.output {
        params.output = output.clone();
    }
    if let Some(luma) = args.luma {
        params.luma = luma;
    }
    if args.manifest {
        params.manifest = true;
    }
    if args.no_listing {
        params.list_working_dir = false;
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    let params = resolve_params(&args)?;

    if let Some(preset_path) = &args.save_config {
        params.save_preset(preset_path)?;
        return Ok(());
    }

    if params.list_working_dir {
        let entries = list_dir(Path::new(".")).map_err(AppError::Listing)?;
        println!("{:?}", entries);
    }

    info!(
        "Packing R={:?} G={:?} B={:?} A={:?} -> {:?}",
        params.inputs.red, params.inputs.green, params.inputs.blue, params.inputs.alpha, params.output
    );

    let report = pack_to_path(&params)?;
    info!(
        "Successfully packed {}x{} {} image: {:?}",
        report.width, report.height, report.format, report.output
    );
    if let Some(sidecar) = &report.manifest {
        info!("Manifest: {:?}", sidecar);
    }

    Ok(())
}
