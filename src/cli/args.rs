use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dedupe")]
#[command(version)]
#[command(
    about = "Deduplicate items, keys, or key=value sets from an argument or stdin",
    long_about = None
)]
pub struct Cli {
    /// Text to deduplicate (reads from stdin if absent or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Separator between key=value [default: =]
    #[arg(long = "key-value-separator", visible_alias = "kv", value_name = "SEP")]
    pub key_value_separator: Option<String>,

    /// Separator between each line or key=value set [default: newline]
    #[arg(short = 'i', long, value_name = "SEP")]
    pub item_separator: Option<String>,

    /// Separator between each value within key=value0,value1... [default: ,]
    #[arg(short = 'v', long, value_name = "SEP")]
    pub value_separator: Option<String>,

    /// key-value, key, or item (alternatively kv, k, i) [default: key-value]
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub mode: Option<String>,

    /// Trim leading/trailing whitespace after parsing, before comparing [default: true]
    #[arg(
        long,
        visible_aliases = ["trim", "tw"],
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub trim_whitespace: Option<bool>,

    /// Extra TOML config file applied over the user and local config
    #[arg(long, env = "DEDUPE_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Log debug diagnostics to stderr
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
