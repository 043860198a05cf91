use clap::Parser;
use flowquest::prelude::*;
use std::io::{self, Write};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Play workflow assembly puzzles in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a level catalog JSON file. Uses the built-in levels when omitted
    #[arg(short, long)]
    catalog: Option<String>,

    /// The level to start on
    #[arg(short, long, default_value_t = 1)]
    level: u32,

    /// Comma-separated node ids to place in slot order, check, and exit
    #[arg(short, long, value_delimiter = ',')]
    solve: Option<Vec<String>>,

    /// List the levels in the catalog and exit
    #[arg(long)]
    list: bool,
}

/// Renders engine notifications as terminal output.
struct TerminalView;

impl LevelObserver for TerminalView {
    fn on_level_loaded(
        &mut self,
        level: u32,
        title: &str,
        description: Option<&str>,
        nodes: &[NodeSpec],
        slot_count: usize,
    ) {
        println!("\n=== {} (#{}) ===", title, level);
        if let Some(description) = description {
            println!("{}", description);
        }
        println!("Palette:");
        for node in nodes {
            println!("  {:<14} {} {} [{}] - {}", node.id, node.icon, node.title, node.kind, node.subtitle);
        }
        let slots = (0..slot_count).map(|i| format!("[{}]", i)).collect::<Vec<_>>();
        println!("Workflow: {}", slots.join(" -- "));
    }

    fn on_node_placed(&mut self, slot: usize, node: &NodeSpec) {
        println!("  slot {} <- {} {}", slot, node.icon, node.title);
    }

    fn on_evaluated(&mut self, _pass: bool, message: &str) {
        println!("{}", message);
    }

    fn on_reset(&mut self) {
        println!("Workflow cleared. All nodes are back in the palette.");
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_tracing() {
        exit_with_error(&e);
    }

    let catalog = match &cli.catalog {
        Some(path) => LevelCatalog::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e))),
        None => LevelCatalog::builtin(),
    };

    if cli.list {
        for (number, title) in catalog.summaries() {
            println!("{:>3}  {}", number, title);
        }
        return;
    }

    match cli.solve {
        Some(ids) => run_non_interactive(catalog, cli.level, ids),
        None => run_interactive(catalog, cli.level),
    }
}

/// Places the given ids in slot order, checks them, and exits with the verdict.
fn run_non_interactive(catalog: LevelCatalog, level: u32, ids: Vec<String>) {
    let mut engine = Engine::builder(catalog)
        .start_level(level)
        .build()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    for (slot, id) in ids.iter().enumerate() {
        if let Err(e) = engine.place(slot, id.trim()) {
            exit_with_error(&e.to_string());
        }
    }

    let verdict = engine.evaluate();
    println!("{}", VerdictFormatter::format_feedback(&verdict));
    if !verdict.pass {
        std::process::exit(1);
    }
}

/// Runs the game loop, reading one command per line.
fn run_interactive(catalog: LevelCatalog, level: u32) {
    println!("--- FlowQuest ---");
    println!("Type 'help' for the list of commands.");

    let mut engine = Engine::builder(catalog)
        .with_observer(TerminalView)
        .start_level(level)
        .build()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    loop {
        let (current, max) = engine.progress();
        let line = prompt_for_input(&format!("{}/{} {}", current, max, engine.state()), None);
        let mut words = line.split_whitespace();

        match (words.next(), words.next(), words.next()) {
            (Some("place"), Some(slot), Some(node_id)) => match slot.parse::<usize>() {
                Ok(slot) => {
                    if let Err(e) = engine.place(slot, node_id) {
                        println!("Cannot place: {}", e);
                    }
                }
                Err(_) => println!("'{}' is not a slot number.", slot),
            },
            (Some("test"), None, None) => {
                let verdict = engine.evaluate();
                if !verdict.pass {
                    println!("  {}", VerdictFormatter::format_sequence(&verdict));
                }
                if engine.can_advance() {
                    offer_next_level(&mut engine);
                }
            }
            (Some("reset"), None, None) => engine.reset(),
            (Some("level"), Some(number), None) => match number.parse::<u32>() {
                Ok(number) => {
                    if let Err(e) = engine.select_level(number) {
                        println!("{}", e);
                    }
                }
                Err(_) => println!("'{}' is not a level number.", number),
            },
            (Some("levels"), None, None) => {
                for (number, title) in engine.catalog().summaries() {
                    let marker = if number == engine.current_level() { '>' } else { ' ' };
                    println!(" {} {:>3}  {}", marker, number, title);
                }
            }
            (Some("palette"), None, None) => {
                for node in engine.available_nodes() {
                    println!("  {:<14} {}", node.id, node);
                }
            }
            (Some("help"), None, None) => print_help(),
            (Some("quit" | "exit"), None, None) => break,
            (None, _, _) => {}
            _ => println!("Unknown command. Type 'help' for the list of commands."),
        }
    }
}

/// Asks before moving on. The engine only advances on an explicit yes.
fn offer_next_level<O: LevelObserver>(engine: &mut Engine<O>) {
    let answer = prompt_for_input(&advance_prompt(engine.current_level() + 1), None);
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = engine.advance() {
            println!("{}", e);
        }
    }
}

/// The `[y/N]` hint already names the default, so no other default is shown.
fn advance_prompt(next: u32) -> String {
    format!("Great job! Ready for Level {}? [y/N]", next)
}

fn print_help() {
    println!("Commands:");
    println!("  place <slot> <node-id>  put a node into an empty slot");
    println!("  test                    check the workflow");
    println!("  reset                   clear every slot");
    println!("  palette                 show nodes that can still be placed");
    println!("  level <n>               jump to level n");
    println!("  levels                  list all levels");
    println!("  quit                    leave the game");
}

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_tracing() -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| format!("Failed to create env filter: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(env_filter)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {}", e))
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if io::stdout().flush().is_err() {
        exit_with_error("Failed to write to stdout");
    }

    match io::stdin().read_line(&mut line) {
        // End of input ends the session.
        Ok(0) => std::process::exit(0),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
