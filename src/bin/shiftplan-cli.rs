#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use shiftplan::{
    directory::{create_employee, list_employees},
    engine::AssignmentEngine,
    io,
    model::Employee,
    schedule::get_employee_schedule,
    storage::{JsonStore, Store},
    SchedError,
};
use std::io::{BufRead, Write};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI d'affectation d'employés aux créneaux (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Répertoire des fichiers JSON (employees, shifts, assignments, config)
    #[arg(long, global = true, default_value = ".")]
    data_dir: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les employés
    Employees,

    /// Ajouter un employé (identifiant généré)
    AddEmployee {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
    },

    /// Affecter un employé à un créneau
    Assign {
        #[arg(long)]
        employee: String,
        #[arg(long)]
        shift: String,
    },

    /// Planning d'un employé en CSV
    Schedule {
        #[arg(long)]
        employee: String,
        /// Fichier de sortie (stdout sinon)
        #[arg(long)]
        out: Option<String>,
    },

    /// Importer des créneaux depuis un CSV `shiftId,date,startTime,endTime`
    ImportShifts {
        #[arg(long)]
        csv: String,
    },

    /// Menu interactif
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let store = JsonStore::open(&cli.data_dir)?;
    let engine = AssignmentEngine::new(store);
    let stdout = std::io::stdout();

    let code = match cli.cmd {
        Commands::Employees => {
            print_employees(&mut stdout.lock(), &list_employees(engine.store())?)?;
            0
        }
        Commands::AddEmployee { name, phone } => {
            let e = create_employee(engine.store(), &name, &phone)?;
            println!("Employee added... ({})", e.employee_id);
            0
        }
        Commands::Assign { employee, shift } => {
            let outcome = engine.assign_employee_to_shift(&employee, &shift)?;
            println!("{}", outcome.message());
            // Code 2 = refus (doublon, inconnu, plafond)
            if outcome.success() {
                0
            } else {
                2
            }
        }
        Commands::Schedule { employee, out } => {
            let schedule = get_employee_schedule(engine.store(), &employee)?;
            match out {
                Some(path) => io::export_schedule_csv(path, &schedule)?,
                None => io::write_schedule_csv(stdout.lock(), &schedule)?,
            }
            0
        }
        Commands::ImportShifts { csv } => {
            let incoming = io::import_shifts_csv(csv)?;
            let store = engine.store();
            let mut catalog = store.load_shifts()?;
            let added = io::merge_shifts(&mut catalog, incoming);
            store.save_shifts(&catalog)?;
            println!("{added} shift(s) imported");
            0
        }
        Commands::Menu => {
            let stdin = std::io::stdin();
            run_menu(&engine, stdin.lock(), stdout.lock())?;
            0
        }
    };

    std::process::exit(code);
}

fn print_employees<W: Write>(out: &mut W, employees: &[Employee]) -> Result<()> {
    if employees.is_empty() {
        writeln!(out, "No employees found")?;
        return Ok(());
    }
    writeln!(out, "{:<12} {:<22} {}", "Employee ID", "Name", "Phone")?;
    writeln!(out, "{:-<12} {:-<22} {:-<9}", "", "", "")?;
    for e in employees {
        writeln!(out, "{:<12} {:<22} {}", e.employee_id.as_str(), e.name, e.phone)?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Boucle interactive : 1 employés, 2 ajout, 3 affectation, 4 planning, 5 sortie.
fn run_menu<S: Store, R: BufRead, W: Write>(
    engine: &AssignmentEngine<S>,
    mut input: R,
    mut out: W,
) -> Result<()> {
    loop {
        writeln!(out, "\nEmployee Scheduling System")?;
        writeln!(out, "1. Show all employees")?;
        writeln!(out, "2. Add new employee")?;
        writeln!(out, "3. Assign employee to shift")?;
        writeln!(out, "4. View employee schedule")?;
        writeln!(out, "5. Exit")?;

        // fin d'entrée = sortie
        let Some(choice) = prompt(&mut input, &mut out, "What is your choice> ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => print_employees(&mut out, &list_employees(engine.store())?)?,
            "2" => {
                let name = prompt(&mut input, &mut out, "Enter employee name: ")?.unwrap_or_default();
                let phone = prompt(&mut input, &mut out, "Enter phone number: ")?.unwrap_or_default();
                match create_employee(engine.store(), &name, &phone) {
                    Ok(_) => writeln!(out, "Employee added...")?,
                    Err(SchedError::MissingField(_)) => writeln!(out, "Name and phone are required")?,
                    Err(e) => return Err(e.into()),
                }
            }
            "3" => {
                let employee = prompt(&mut input, &mut out, "Enter employee ID: ")?.unwrap_or_default();
                let shift = prompt(&mut input, &mut out, "Enter shift ID: ")?.unwrap_or_default();
                if employee.is_empty() || shift.is_empty() {
                    writeln!(out, "Employee ID and Shift ID required")?;
                    continue;
                }
                let outcome = engine.assign_employee_to_shift(&employee, &shift)?;
                writeln!(out, "{}", outcome.message())?;
            }
            "4" => {
                let employee = prompt(&mut input, &mut out, "Enter employee ID: ")?.unwrap_or_default();
                if employee.is_empty() {
                    writeln!(out, "Employee ID required")?;
                    continue;
                }
                let schedule = get_employee_schedule(engine.store(), &employee)?;
                io::write_schedule_csv(&mut out, &schedule)?;
            }
            "5" => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice")?,
        }
    }
}
