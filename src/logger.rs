use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

#[macro_export]
macro_rules! ledger_info {
    ($($arg:tt)*) => {
        info!(target: "ledger", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! miner_info {
    ($($arg:tt)*) => {
        info!(target: "miner", "{}", format_args!($($arg)*));
    };
}

pub fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            // Prepend prefix based on the log target
            let prefix = match record.target() {
                "ledger" => "[LEDGER]",
                "miner" => "[MINER]",
                _ => "[GENERAL]", // Default prefix
            };
            writeln!(
                buf,
                "{} [{}] {}",
                prefix,
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info) // Default log level
        .init();
}
