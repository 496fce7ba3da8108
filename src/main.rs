use anyhow::Context;
use clap::Parser;
use roster::application::{init::init, CenterService, ConfigService};
use roster::cli::input::{required, student_fields};
use roster::cli::{
    format_course_list, format_enrollment_list, format_student_list, Cli, Commands,
    CourseCommand, StudentCommand,
};
use roster::error::RosterError;
use roster::infrastructure::{FileStore, FileSystemWorkspace, Workspace};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Never)
        .context("failed to initialize logger")
}

fn open_center() -> Result<CenterService<FileStore>, RosterError> {
    let workspace = FileSystemWorkspace::discover()?;
    log::debug!("Using center at {}", workspace.root().display());
    CenterService::open_workspace(&workspace)
}

fn run(cli: Cli) -> Result<(), RosterError> {
    match cli.command {
        Some(Commands::Init { path, name }) => {
            let name = name.map(|n| required("center name", &n)).transpose()?;
            let config = init(&path, name)?;
            println!("Initialized roster at {}", path.display());
            println!("Name: {}", config.name);
            Ok(())
        }
        Some(Commands::Student(command)) => run_student(command),
        Some(Commands::Course(command)) => run_course(command),
        Some(Commands::Enroll { student_id, course }) => {
            let course = required("course name", &course)?;
            let mut center = open_center()?;
            let enrollment = center.enroll(student_id, &course)?;
            if let Some(label) = center.roster().enrollment_label(&enrollment) {
                println!("{}", label);
            }
            Ok(())
        }
        Some(Commands::Enrollments) => {
            let center = open_center()?;
            let labels = center.roster().enrollment_labels();
            print!("{}", with_newline(format_enrollment_list(&labels)));
            Ok(())
        }
        Some(Commands::Overview) => {
            let workspace = FileSystemWorkspace::discover()?;
            let config = workspace.load_config()?;
            let center = CenterService::open(FileStore::new(workspace.data_path(&config)))?;
            println!("{}\n", config.name);
            print!("{}", center.overview());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("name = {}", config.name);
                println!("data_file = {}", config.data_file);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: roster config [--list | <key> [<value>]]");
                println!("Valid keys: name, data_file, created");
            }
            Ok(())
        }
        None => {
            println!("roster - Coaching center records");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn run_student(command: StudentCommand) -> Result<(), RosterError> {
    match command {
        StudentCommand::Add(args) => {
            let fields = student_fields(&args)?;
            let mut center = open_center()?;
            let student = center.add_student(fields)?;
            println!("Added student {}", student.label());
        }
        StudentCommand::Update { id, fields } => {
            let fields = student_fields(&fields)?;
            let mut center = open_center()?;
            let student = center.update_student(id, fields)?;
            println!("Updated student {}", student.label());
        }
        StudentCommand::Remove { id } => {
            let mut center = open_center()?;
            let student = center.remove_student(id)?;
            println!("Removed student {}", student.label());
        }
        StudentCommand::List { details } => {
            let center = open_center()?;
            let listing = format_student_list(center.roster().students(), details);
            print!("{}", with_newline(listing));
        }
    }
    Ok(())
}

fn run_course(command: CourseCommand) -> Result<(), RosterError> {
    match command {
        CourseCommand::Add { name } => {
            let name = required("course name", &name)?;
            let mut center = open_center()?;
            let course = center.add_course(&name)?;
            println!("Added course {}", course);
        }
        CourseCommand::Rename { name, new_name } => {
            let name = required("course name", &name)?;
            let new_name = required("course name", &new_name)?;
            let mut center = open_center()?;
            let course = center.update_course(&name, &new_name)?;
            println!("Renamed course {} to {}", name, course);
        }
        CourseCommand::Assign { name, instructor } => {
            let name = required("course name", &name)?;
            let instructor = required("instructor name", &instructor)?;
            let mut center = open_center()?;
            let course = center.assign_instructor(&name, &instructor)?;
            println!("{}", course.details());
        }
        CourseCommand::Remove { name } => {
            let name = required("course name", &name)?;
            let mut center = open_center()?;
            let course = center.remove_course(&name)?;
            println!("Removed course {}", course);
        }
        CourseCommand::List { details } => {
            let center = open_center()?;
            let listing = format_course_list(center.roster().courses(), details);
            print!("{}", with_newline(listing));
        }
    }
    Ok(())
}

// The list formatters return a bare message when empty.
fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
