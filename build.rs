use std::cmp::Ordering;
use std::env;

const BACKEND_OVERRIDE_VAR: &str = "SIMDLY_VEC4_BACKEND";

// Every cfg flag this build script can emit
const CFG_FLAGS: [&str; 5] = ["sse4", "sse2", "neon64", "neon32", "fallback"];

// Vector backends we can select
#[derive(PartialEq, Eq, Debug)]
struct Backend {
    name: &'static str,
    arch: &'static [&'static str],
    target_features: &'static [&'static str],
    cfg_flag: &'static str,
    available: bool,
}

impl Backend {
    // Define priority order between backends (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.cfg_flag {
            "sse4" => 0,
            "neon64" => 1,
            "sse2" => 2,
            "neon32" => 3,
            _ => usize::MAX, // scalar fallback
        }
    }

    fn backends() -> Vec<Backend> {
        vec![
            Backend {
                name: "sse4.1",
                arch: &["x86", "x86_64"],
                target_features: &["sse2", "sse4.1"],
                cfg_flag: "sse4",
                available: false,
            },
            Backend {
                name: "sse2",
                arch: &["x86", "x86_64"],
                target_features: &["sse2"],
                cfg_flag: "sse2",
                available: false,
            },
            Backend {
                name: "neon (aarch64)",
                arch: &["aarch64"],
                target_features: &["neon"],
                cfg_flag: "neon64",
                available: false,
            },
            // ARMv7 instruction subset, executed through the aarch64 intrinsics. Outranked
            // by neon64, so it is only selected through the override.
            Backend {
                name: "neon (armv7 subset)",
                arch: &["aarch64"],
                target_features: &["neon"],
                cfg_flag: "neon32",
                available: false,
            },
        ]
    }
}

impl Ord for Backend {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for Backend {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Marks which backends the target can run
trait BackendDetector {
    fn detect(&self, backends: &mut [Backend]);
}

// Reads the features rustc will compile the crate with (not the host CPU),
// so cross builds pick the right backend.
struct TargetDetector {
    arch: String,
    features: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(|feature| feature.trim().to_string())
            .filter(|feature| !feature.is_empty())
            .collect();

        Self { arch, features }
    }
}

impl BackendDetector for TargetDetector {
    fn detect(&self, backends: &mut [Backend]) {
        for backend in backends.iter_mut() {
            let arch_matches = backend.arch.contains(&self.arch.as_str());
            let features_enabled = backend
                .target_features
                .iter()
                .all(|required| self.features.iter().any(|enabled| enabled == required));

            backend.available = arch_matches && features_enabled;
        }
    }
}

struct BackendSelector;
impl BackendSelector {
    fn requested_backend() -> Option<String> {
        env::var(BACKEND_OVERRIDE_VAR)
            .ok()
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty())
    }

    fn select(backends: &mut [Backend]) -> &'static str {
        // Sort backends by priority (highest first)
        backends.sort();

        let detected = backends
            .iter()
            .find(|backend| backend.available)
            .map(|backend| backend.cfg_flag)
            .unwrap_or("fallback");

        let Some(requested) = Self::requested_backend() else {
            return detected;
        };

        if requested == "scalar" || requested == "fallback" {
            return "fallback";
        }

        match backends
            .iter()
            .find(|backend| backend.cfg_flag == requested)
        {
            Some(backend) if backend.available => backend.cfg_flag,
            Some(backend) => {
                println!(
                    "cargo:warning={BACKEND_OVERRIDE_VAR}={requested} ignored: {} is not enabled for this target, using {detected}",
                    backend.name
                );
                detected
            }
            None => {
                println!(
                    "cargo:warning={BACKEND_OVERRIDE_VAR}={requested} is not a known backend (expected one of scalar, sse2, sse4, neon32, neon64), using {detected}"
                );
                detected
            }
        }
    }

    fn apply(cfg_flag: &str) {
        println!("cargo:rustc-cfg={cfg_flag}");

        for flag in CFG_FLAGS {
            println!("cargo::rustc-check-cfg=cfg({flag})");
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={BACKEND_OVERRIDE_VAR}");

    let mut backends = Backend::backends();

    TargetDetector::from_env().detect(&mut backends);

    let cfg_flag = BackendSelector::select(&mut backends);

    BackendSelector::apply(cfg_flag);
}
