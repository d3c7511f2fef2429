//! app-cli's entry point.
//! Parses arguments, sets up logging and reports the outcome of the run.

use app_cli::{
    cli::get_args,
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    scaffold::{Outcome, Scaffold},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: app_cli::cli::Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let prompt = DialoguerPrompter::new();
    let engine = MiniJinjaRenderer::new();

    match Scaffold::new(args, cwd).run(&prompt, &engine)? {
        Outcome::Help(text) => println!("{text}"),
        Outcome::Version(version) => println!("{version}"),
        Outcome::ConfigUpdated(path) => {
            println!("Configuration saved to {}.", path.display())
        }
        Outcome::Created(report) => {
            println!(
                "Created app in {} ({} files, {} directories).",
                report.target.display(),
                report.files.len(),
                report.directories.len()
            );
            if let Some(name) = report.target.file_name() {
                println!("cd {}", name.to_string_lossy());
            }
        }
    }
    Ok(())
}
