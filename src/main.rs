use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    match mandelbrot_plot::RunCliCommand::from_env().execute() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "render failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
