use std::thread;
use clap::{Parser, Command};
use reedline::{Reedline, Signal};
use tokio::sync::mpsc::UnboundedSender;

mod prompt;
use prompt::ShellPrompt;

mod cmds {
    pub(crate) mod contact_cmd;
    #[cfg(test)] mod test_contact_cmd;
}

use contacts::{
    configuration as cfg,
    logger,
    APIClient,
    EventLoop,
    Intent,
    View,
    ViewListener,
};

fn build_cli() -> Command {
    Command::new("contacts")
        .about("Interactive contact manager shell")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(cmds::contact_cmd::list_cli())
        .subcommand(cmds::contact_cmd::draft_cli())
        .subcommand(cmds::contact_cmd::add_cli())
        .subcommand(cmds::contact_cmd::edit_cli())
        .subcommand(cmds::contact_cmd::set_cli())
        .subcommand(cmds::contact_cmd::update_cli())
        .subcommand(cmds::contact_cmd::cancel_cli())
        .subcommand(cmds::contact_cmd::delete_cli())
        .help_template("{subcommands}")
}

struct ConsoleRenderer;
impl ViewListener for ConsoleRenderer {
    fn on_render(&self, view: &View) {
        println!("\n{}", view);
    }
}

// Runs on its own thread, reedline blocks while waiting for a line.
fn read_intents(tx: UnboundedSender<Intent>, endpoint: String) {
    let mut cli = build_cli();
    let mut rl = Reedline::create();
    let prompt = ShellPrompt::new(&endpoint);

    println!("Welcome to the contact manager shell. Type 'exit' to quit.\n");

    loop {
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            break;
        };
        match sig {
            Signal::Success(line) => {
                let input = line.trim();

                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => break,
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args: Vec<String> = input.split_whitespace().map(|s| s.to_string())
                    .collect();

                if args[0] == "help" && args.len() > 1 {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let matches = match cli.clone().try_get_matches_from(&args) {
                    Ok(v) => v,
                    Err(_) => {
                        println!("Error: command not found: '{}'", input);
                        continue;
                    }
                };

                match cmds::contact_cmd::to_intent(&matches) {
                    Ok(intent) => if tx.send(intent).is_err() {
                        break;
                    },
                    Err(e) => println!("Error: {e}"),
                }
            }
            Signal::CtrlC | Signal::CtrlD => break,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version = "1.0")]
#[command(about = "Contact manager over a REST collection", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Base url of the remote collection service
    #[arg(short = 'u', long, value_name = "URL")]
    api_url: Option<String>,

    /// Name of the resource collection
    #[arg(short, long, value_name = "NAME")]
    resource: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = builder.load(path) {
            eprintln!("Loading config file {} error: {e}", path);
            return;
        }
    }
    if let Some(url) = opts.api_url.as_deref() {
        builder.with_api_url(url);
    }
    if let Some(resource) = opts.resource.as_deref() {
        builder.with_resource(resource);
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    logger::setup(cfg.log_level(), cfg.log_file());

    let client = match APIClient::from_config(cfg.as_ref()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating api client error: {e}");
            return;
        }
    };

    let endpoint = match client.collection_url() {
        Ok(url) => url.to_string(),
        Err(e) => {
            eprintln!("Invalid collection url: {e}");
            return;
        }
    };

    let (event_loop, tx) = EventLoop::new(client);
    let event_loop = event_loop.with_listener(ConsoleRenderer);

    let input = thread::spawn(move || read_intents(tx, endpoint));
    _ = event_loop.run().await;
    _ = input.join();

    println!("Goodbye!");
    logger::teardown();
}
