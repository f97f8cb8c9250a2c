#![allow(unused_macros, dead_code)]
macro_rules! verbose_println {
    ($($p:expr),+) => {
        if (config::ARGS.verbose) {
            println!($($p),+);
        }
    }
}
macro_rules! info {
    ($($p:expr),+) => {
        println!(concat!(blue!("INFO"),": {}"),format_args!($($p),+))
    }
}

macro_rules! warn {
    ($($p:expr),+) => {
        println!(concat!(yellow!("WARNING"),": {}"),format_args!($($p),+))
    }
}
macro_rules! structural_err {
    ($ctx:expr, $($msg:expr),+) => {
        Error::new(
            crate::ErrorKind::Structural,
            Some($ctx),
            format!("{} {}", red!("Structural Error"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! unsupported_mode_err {
    ($ctx:expr, $($msg:expr),+) => {
        Error::new(
            crate::ErrorKind::UnsupportedMode,
            Some($ctx),
            format!("{} {}", red!("Unsupported Mode"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! malformed_row_err {
    ($ctx:expr, $($msg:expr),+) => {
        Error::new(
            crate::ErrorKind::MalformedRow,
            Some($ctx),
            format!("{} {}", red!("Malformed Row"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! conflict_err {
    ($ctx:expr, $($msg:expr),+) => {
        Error::new(
            crate::ErrorKind::OpcodeConflict,
            Some($ctx),
            format!("{} {}", red!("Opcode Conflict"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! color {
    ($color: literal, $msg: expr) => {
        concat!("\x1b[", $color, "m", $msg, "\x1b[0m")
    };
}
macro_rules! red {
    ($msg:expr) => {
        color!(91, $msg)
    };
}
macro_rules! green {
    ($msg:expr) => {
        color!(92, $msg)
    };
}
macro_rules! yellow {
    ($msg:expr) => {
        color!(93, $msg)
    };
}
macro_rules! blue {
    ($msg:expr) => {
        color!(94, $msg)
    };
}
