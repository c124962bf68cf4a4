use std::iter::Peekable;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印演示计划 `-v`
    Verbose,
}

pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg {
        Some(arg) => match arg.as_str() {
            "-h" => Some(Config::Help),
            "-V" => Some(Config::Version),
            "-v" => Some(Config::Verbose),
            _ => None, // 遇到未知参数，停止解析（由调用者处理）
        },
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
        args_line.split(' ').map(String::from).peekable()
    }

    #[test]
    fn test_parse_configs_stops_at_first_unknown() {
        let mut args = build_args("-v people trace");
        assert_eq!(vec![Config::Verbose], parse_configs(&mut args));
        assert_eq!(Some("people".to_string()), args.next());
    }

    #[test]
    fn test_parse_configs_collects_leading_flags() {
        let mut args = build_args("-h -V -v");
        assert_eq!(vec![Config::Help, Config::Version, Config::Verbose], parse_configs(&mut args));
        assert_eq!(None, args.next());
    }
}
