//! Headless mode for the story dashboard.
//!
//! This module provides a simple line-oriented interface for scripts and
//! automated checks. Selections go through the real dispatcher; navigation
//! requests are printed instead of changing screens.

use std::io::{self, BufRead, Write};

use katha_core::{Catalog, Dispatcher, Navigator, StoryRecord};

/// A navigator that prints every requested path.
struct TraceNavigator;

impl Navigator for TraceNavigator {
    fn navigate_to(&mut self, path: &str) {
        println!("[NAV] {path}");
    }
}

/// Configuration for a headless run.
#[derive(Debug, Clone, Default)]
pub struct HeadlessConfig {
    /// Entries to open (1-based position or route token), then exit.
    /// Empty means interactive stdin mode.
    pub opens: Vec<String>,
}

/// Parse headless options from command line arguments.
pub fn parse_config_from_args(args: &[String]) -> HeadlessConfig {
    let mut config = HeadlessConfig::default();

    let mut i = 0;
    while i < args.len() {
        if args[i] == "--open" {
            if let Some(target) = args.get(i + 1) {
                config.opens.push(target.clone());
                i += 1;
            }
        }
        i += 1;
    }

    config
}

/// Run the dashboard in headless mode.
///
/// This provides a simple line-oriented protocol:
/// - Lines starting with `#` are commands (list, routes, json, open, quit)
/// - Dispatched navigations are printed as `[NAV] /<route>`
pub fn run_headless(
    config: HeadlessConfig,
    catalog: Catalog,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dispatcher = Dispatcher::new(TraceNavigator);

    println!("=== Katha Headless Mode ===");
    println!("{} stories in the catalog.", catalog.len());
    println!();

    // Scripted mode: open the requested entries and exit.
    if !config.opens.is_empty() {
        for target in &config.opens {
            open_target(&catalog, &mut dispatcher, target);
        }
        return Ok(());
    }

    print_commands();
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !line.starts_with('#') {
            println!("[ERROR] Unknown input. Type #help for help.");
            continue;
        }

        let parts: Vec<&str> = line[1..].split_whitespace().collect();
        match parts.first().copied() {
            Some("quit") | Some("exit") => {
                println!("Goodbye!");
                break;
            }
            Some("list") => print_catalog(&catalog),
            Some("routes") => print_collisions(&catalog),
            Some("json") => println!("{}", serde_json::to_string_pretty(catalog.records())?),
            Some("open") => {
                if let Some(target) = parts.get(1) {
                    open_target(&catalog, &mut dispatcher, target);
                } else {
                    println!("[ERROR] Usage: #open <n|route>");
                }
            }
            Some("help") => print_commands(),
            _ => {
                println!("[ERROR] Unknown command. Type #help for help.");
            }
        }
        stdout.flush().ok();
    }

    Ok(())
}

/// Dispatch `target`, a 1-based position or a route token.
fn open_target<N: Navigator>(catalog: &Catalog, dispatcher: &mut Dispatcher<N>, target: &str) {
    let record = match resolve_target(catalog, target) {
        Some(record) => record,
        None => {
            println!("[ERROR] No story matches {target:?}");
            return;
        }
    };

    if let Err(e) = dispatcher.dispatch(catalog, record) {
        println!("[ERROR] {e}");
    }
}

/// Resolve a 1-based position or route token to a catalog record.
///
/// A route shared by several records resolves to the first; the router
/// would land every one of them on the same destination anyway.
fn resolve_target<'a>(catalog: &'a Catalog, target: &str) -> Option<&'a StoryRecord> {
    if let Ok(n) = target.parse::<usize>() {
        return n.checked_sub(1).and_then(|index| catalog.get(index));
    }
    catalog.records().iter().find(|r| r.route == target)
}

fn print_catalog(catalog: &Catalog) {
    for (i, record) in catalog.records().iter().enumerate() {
        println!(
            "{:>2}. {} [{}] /{}",
            i + 1,
            record.name,
            record.genre,
            record.route
        );
        println!("    {}", record.description);
    }
}

fn print_collisions(catalog: &Catalog) {
    let collisions = catalog.route_collisions();
    if collisions.is_empty() {
        println!("Every story has its own destination.");
        return;
    }
    for collision in collisions {
        println!(
            "/{} is shared by {} entries:",
            collision.route,
            collision.names.len()
        );
        for name in &collision.names {
            println!("  - {name}");
        }
    }
}

fn print_commands() {
    println!("Commands:");
    println!("  #list          - List the catalog");
    println!("  #routes        - Show routes shared by several stories");
    println!("  #json          - Dump the catalog as JSON");
    println!("  #open <n|route> - Dispatch a story by position or route");
    println!("  #help          - Show this help");
    println!("  #quit          - Exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use katha_core::sample_records;
    use katha_core::testing::RecordingNavigator;

    fn sample_catalog() -> Catalog {
        Catalog::new(sample_records()).unwrap()
    }

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_collects_repeated_opens() {
        let args = to_args(&["katha", "--headless", "--open", "2", "--open", "golconda"]);
        let config = parse_config_from_args(&args);
        assert_eq!(config.opens, ["2", "golconda"]);
    }

    #[test]
    fn test_parse_ignores_trailing_open_without_value() {
        let args = to_args(&["katha", "--headless", "--open"]);
        let config = parse_config_from_args(&args);
        assert!(config.opens.is_empty());
    }

    #[test]
    fn test_resolve_by_position_is_one_based() {
        let catalog = sample_catalog();
        let record = resolve_target(&catalog, "1").unwrap();
        assert_eq!(record.name, "Whispering Fort");

        assert!(resolve_target(&catalog, "0").is_none());
        assert!(resolve_target(&catalog, "7").is_none());
    }

    #[test]
    fn test_resolve_by_route_picks_the_first_entry() {
        let catalog = sample_catalog();
        let record = resolve_target(&catalog, "cleanliness").unwrap();
        assert_eq!(record.name, "Clean Brilliance");
    }

    #[test]
    fn test_resolve_unknown_target() {
        let catalog = sample_catalog();
        assert!(resolve_target(&catalog, "atlantis").is_none());
    }

    #[test]
    fn test_scripted_opens_dispatch_in_order() {
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());

        open_target(&catalog, &mut dispatcher, "1");
        open_target(&catalog, &mut dispatcher, "mahakumbh");
        open_target(&catalog, &mut dispatcher, "nowhere");

        assert_eq!(
            dispatcher.navigator().paths(),
            ["/golconda", "/mahakumbh"]
        );
    }
}
