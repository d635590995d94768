//! cv-tailor: personal CV and website generator

use clap::Parser;
use cv_tailor::cli::{self, Cli, Commands, ConfigAction, PublicationsAction};
use cv_tailor::config::Config;
use cv_tailor::error::{CvTailorError, Result};
use cv_tailor::profile::{load_profile, Profile};
use cv_tailor::render::{write_pages, LatexRenderer};
use cv_tailor::tailor::{match_report, Tailoring};
use cv_tailor::watch::FileWatcher;
use cv_tailor::{pdf, publications};
use log::{error, info};
use std::fs;
use std::path::Path;
use std::process;
use std::time::Duration;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            output,
            no_latex,
            no_html,
            pdf: compile,
        } => {
            info!("starting CV generation");
            let config = Config::load(&cli.config)?;
            let profile = load_profile(&cli.data)?;
            generate(&profile, &config, &output, no_latex, no_html, compile)?;
        }

        Commands::Tailor {
            job,
            output,
            max_experience,
            max_projects,
            pdf: compile,
        } => {
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| CvTailorError::InvalidInput(format!("job description file: {}", e)))?;
            if !job.exists() {
                return Err(CvTailorError::MissingInput(job));
            }

            let job_text = fs::read_to_string(&job)?;
            if job_text.trim().is_empty() {
                return Err(CvTailorError::InvalidInput(
                    "empty job description provided".to_string(),
                ));
            }
            println!("📄 Loaded job description from: {}", job.display());

            let mut config = Config::load(&cli.config)?;
            if max_experience.is_some() {
                config.cv_settings.max_experience = max_experience;
            }
            if max_projects.is_some() {
                config.cv_settings.max_projects = max_projects;
            }

            let profile = load_profile(&cli.data)?;
            let tailoring = Tailoring::from_job_description(&job_text)?;

            let document = LatexRenderer::new(&profile, &config)
                .with_tailoring(&tailoring)
                .render();
            write_text(&output, &document)?;
            println!("✅ Tailored CV generated: {}", output.display());
            println!("{}", match_report(&tailoring.matches));

            if compile && pdf::compile_pdf(&output)? {
                println!("📄 PDF compiled: {}", output.with_extension("pdf").display());
            }
        }

        Commands::Publications { action } => match action {
            PublicationsAction::Merge { file } => {
                let total = publications::merge_into_data_file(&cli.data, &file)?;
                println!("✅ Publications updated ({} total)", total);
            }
        },

        Commands::Watch { output, interval } => {
            let config = Config::load(&cli.config)?;
            if !cli.data.exists() {
                return Err(CvTailorError::MissingInput(cli.data));
            }

            println!("📋 Current CV configuration:");
            for (name, enabled) in config.cv_sections.all() {
                let status = if enabled { "✅ enabled" } else { "❌ disabled" };
                println!("   {}: {}", name, status);
            }
            println!(
                "\n💡 Edit {} to control which sections appear in your CV",
                cli.config.display()
            );
            println!("💡 Edit {} to update your content", cli.data.display());
            println!(
                "\n👀 Watching for changes in {} and {}",
                cli.data.display(),
                cli.config.display()
            );
            println!("📍 Press Ctrl+C to stop watching");

            let data_path = cli.data.clone();
            let config_path = cli.config.clone();
            let watcher = FileWatcher::new(
                [cli.data, cli.config],
                Duration::from_secs(interval.max(1)),
            );
            watcher.watch(move |_changed| {
                let config = Config::load(&config_path)?;
                let profile = load_profile(&data_path)?;
                generate(&profile, &config, &output, false, false, true)
            })
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let config = Config::load(&cli.config)?;
                println!("⚙️  Current configuration ({})\n", cli.config.display());

                println!("Sections:");
                for (name, enabled) in config.cv_sections.all() {
                    let status = if enabled { "✅ enabled" } else { "❌ disabled" };
                    println!("   {}: {}", name, status);
                }

                let settings = &config.cv_settings;
                println!("\nSettings:");
                if let Some(n) = settings.max_experience {
                    println!("   max_experience: {}", n);
                }
                if let Some(n) = settings.max_projects {
                    println!("   max_projects: {}", n);
                }
                if let Some(n) = settings.max_publications {
                    println!("   max_publications: {}", n);
                }
                if let Some(n) = settings.max_activities {
                    println!("   max_activities: {}", n);
                }
                println!("   include_abstracts: {}", settings.include_abstracts);
                if let Some(status) = &settings.projects_status_filter {
                    println!("   projects_status_filter: {}", status);
                }
                if let Some(kind) = &settings.activities_type_filter {
                    println!("   activities_type_filter: {}", kind);
                }

                println!(
                    "\n💡 Edit {} to customize which sections appear in your CV",
                    cli.config.display()
                );
            }
            Some(ConfigAction::Reset) => {
                Config::default().save(&cli.config)?;
                println!("✅ Configuration reset to defaults: {}", cli.config.display());
            }
        },
    }

    Ok(())
}

/// One full generation pass into `output_dir`.
fn generate(
    profile: &Profile,
    config: &Config,
    output_dir: &Path,
    no_latex: bool,
    no_html: bool,
    compile: bool,
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    if !no_latex {
        let document = LatexRenderer::new(profile, config).render();
        let tex_path = output_dir.join("CV.tex");
        fs::write(&tex_path, document)?;
        println!(
            "✅ {} generated with sections: {}",
            tex_path.display(),
            config.cv_sections.enabled().join(", ")
        );

        if compile {
            if pdf::compile_pdf(&tex_path)? {
                println!("📄 PDF compiled: {}", tex_path.with_extension("pdf").display());
            } else {
                println!("⚠️  PDF compilation failed (LaTeX may not be installed)");
            }
        }
    }

    if !no_html {
        let written = write_pages(profile, output_dir)?;
        println!("✅ {} website pages generated", written.len());
    }

    Ok(())
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}
