#![allow(dead_code)]

pub const PETAL_VARS: &[&str] = &[
    "PETAL_CONFIG",
    "PETAL_SEED",
    "PETAL_AI",
    "PETAL_AI_DELAY_MS",
    "PETAL_FIRST_PLAYER",
];

/// Sets or clears an environment variable for the life of the guard.
/// Callers hold `#[serial]` so no other test observes the change.
pub struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }

    pub fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        // SAFETY: env-mutating tests are serialized
        unsafe {
            match &self.previous {
                Some(prev) => std::env::set_var(self.key, prev),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

pub fn clean_env() -> Vec<TempEnvVar> {
    PETAL_VARS.iter().map(|k| TempEnvVar::unset(k)).collect()
}

/// Runs the CLI and returns (exit code, stdout, stderr).
pub fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = petal_cli::run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}
