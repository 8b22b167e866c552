/// A script embedded in the binary and evaluated at startup
#[derive(Debug, Clone, Copy)]
pub struct Script {
    pub name: &'static str,
    pub source: &'static str,
}

/// Evaluated in order; later scripts use names defined by earlier ones.
pub const INIT_SCRIPTS: &[Script] = &[
    Script {
        name: "sta/util.py",
        source: include_str!("../../python/sta/util.py"),
    },
    Script {
        name: "sta/splash.py",
        source: include_str!("../../python/sta/splash.py"),
    },
    Script {
        name: "sta/cmds.py",
        source: include_str!("../../python/sta/cmds.py"),
    },
];

/// Finishes interpreter-side setup once the init scripts are loaded
pub const BOOTSTRAP_COMMAND: &str = "init_sta_cmds()";

pub const SPLASH_COMMAND: &str = "show_splash()";
