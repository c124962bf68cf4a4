use crate::config::{Config, parse_configs};
use crate::demo::Scenario;
use crate::err::SqErr;
use itertools::Itertools;

mod config;
mod demo;
mod err;
mod pipe;
mod print;

/// 整数类型
pub(crate) type Integer = i64;

/// 浮点类型
pub(crate) type Float = f64;

pub(crate) type SqRes<T> = Result<T, SqErr>;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), SqErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let scenarios = parse_scenarios(args)?;
    if configs.contains(&Config::Verbose) {
        println!("Scenario:");
        println!("{}", scenarios.iter().map(|scenario| format!("    {:?}", scenario)).join("\n"));
    }
    for scenario in scenarios {
        scenario.run();
    }
    Ok(())
}

fn parse_scenarios(args: impl Iterator<Item = String>) -> Result<Vec<Scenario>, SqErr> {
    let names = args.collect::<Vec<_>>();
    if names.is_empty() {
        // 未指定场景时按固定顺序运行全部演示
        Ok(Scenario::all())
    } else {
        names.into_iter().map(|name| Scenario::from_name(&name).ok_or(SqErr::UnknownScenario { name })).collect()
    }
}

fn print_help() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("用法：sq [-h] [-V] [-v] [<scenario>...]");
    println!("场景：");
    for (_, help) in Scenario::all_help() {
        println!("{help}");
    }
}
