// File: crates/splot-cli/src/catalog.rs
// Summary: Built-in functions the CLI can plot, with their numeric parameters and defaults.

use anyhow::{bail, Result};
use splot_core::plot::YAXIS_PARAM;
use splot_core::{Function2D, Function3D, Params};

pub struct Entry<F> {
    pub name: &'static str,
    pub about: &'static str,
    /// Accepted numeric params and their defaults.
    pub params: &'static [(&'static str, f64)],
    make: fn() -> F,
}

impl<F> Entry<F> {
    pub fn build(&self) -> F { (self.make)() }

    /// Reject params this entry does not know and non-numeric values.
    /// `allow_axis` admits the 2D `yaxis` selector.
    pub fn check_params(&self, params: &Params, allow_axis: bool) -> Result<()> {
        for (key, value) in params.iter() {
            if allow_axis && key == YAXIS_PARAM {
                continue;
            }
            if !self.params.iter().any(|(k, _)| *k == key) {
                let known: Vec<&str> = self.params.iter().map(|(k, _)| *k).collect();
                bail!("'{}' has no parameter '{key}' (accepts: {})", self.name, describe(&known));
            }
            if value.as_number().is_none() {
                bail!("parameter '{key}' of '{}' must be a number, got '{value}'", self.name);
            }
        }
        Ok(())
    }
}

fn describe(keys: &[&str]) -> String {
    if keys.is_empty() { "none".to_string() } else { keys.join(", ") }
}

/// Numeric param with a fallback. Values were checked by `check_params`.
fn num(p: &Params, key: &str, default: f64) -> f64 {
    p.number_or(key, default).unwrap_or(default)
}

pub static FUNCTIONS_2D: &[Entry<Function2D>] = &[
    Entry { name: "sin", about: "sin(x)", params: &[], make: || Function2D::simple("sin", f64::sin) },
    Entry { name: "cos", about: "cos(x)", params: &[], make: || Function2D::simple("cos", f64::cos) },
    Entry { name: "tan", about: "tan(x)", params: &[], make: || Function2D::simple("tan", f64::tan) },
    Entry { name: "exp", about: "e^x", params: &[], make: || Function2D::simple("exp", f64::exp) },
    Entry { name: "ln", about: "natural log", params: &[], make: || Function2D::simple("ln", f64::ln) },
    Entry { name: "sqrt", about: "square root", params: &[], make: || Function2D::simple("sqrt", f64::sqrt) },
    Entry { name: "square", about: "x^2", params: &[], make: || Function2D::simple("square", |x| x * x) },
    Entry {
        name: "power",
        about: "x^p",
        params: &[("p", 2.0)],
        make: || Function2D::new("power", |x, p| x.powf(num(p, "p", 2.0))),
    },
    Entry {
        name: "gaussian",
        about: "exp(-(x-mu)^2 / (2 sigma^2))",
        params: &[("mu", 5.0), ("sigma", 1.0)],
        make: || {
            Function2D::new("gaussian", |x, p| {
                let (mu, sigma) = (num(p, "mu", 5.0), num(p, "sigma", 1.0));
                (-(x - mu).powi(2) / (2.0 * sigma * sigma)).exp()
            })
        },
    },
    Entry {
        name: "damped",
        about: "exp(-k x) sin(omega x)",
        params: &[("k", 0.3), ("omega", 4.0)],
        make: || Function2D::new("damped", |x, p| (-num(p, "k", 0.3) * x).exp() * (num(p, "omega", 4.0) * x).sin()),
    },
    Entry {
        name: "sinc",
        about: "sin(x) / x",
        params: &[],
        make: || Function2D::simple("sinc", |x| if x == 0.0 { 1.0 } else { x.sin() / x }),
    },
    Entry {
        name: "logistic",
        about: "1 / (1 + exp(-k (x - x0)))",
        params: &[("k", 1.0), ("x0", 5.0)],
        make: || Function2D::new("logistic", |x, p| 1.0 / (1.0 + (-num(p, "k", 1.0) * (x - num(p, "x0", 5.0))).exp())),
    },
];

pub static FUNCTIONS_3D: &[Entry<Function3D>] = &[
    Entry {
        name: "saddle",
        about: "(x-5.5)^2 - (y-5.5)^2",
        params: &[],
        make: || Function3D::simple("saddle", |x, y| (x - 5.5).powi(2) - (y - 5.5).powi(2)),
    },
    Entry {
        name: "paraboloid",
        about: "(x-5.5)^2 + (y-5.5)^2",
        params: &[],
        make: || Function3D::simple("paraboloid", |x, y| (x - 5.5).powi(2) + (y - 5.5).powi(2)),
    },
    Entry {
        name: "ripple",
        about: "sin(freq * r), r from the centre",
        params: &[("freq", 1.0)],
        make: || Function3D::new("ripple", |x, y, p| (num(p, "freq", 1.0) * (x - 5.5).hypot(y - 5.5)).sin()),
    },
    Entry {
        name: "gaussian2d",
        about: "exp(-((x-x0)^2 + (y-y0)^2) / (2 sigma^2))",
        params: &[("sigma", 2.0), ("x0", 5.5), ("y0", 5.5)],
        make: || {
            Function3D::new("gaussian2d", |x, y, p| {
                let s = num(p, "sigma", 2.0);
                let r2 = (x - num(p, "x0", 5.5)).powi(2) + (y - num(p, "y0", 5.5)).powi(2);
                (-r2 / (2.0 * s * s)).exp()
            })
        },
    },
    Entry { name: "product", about: "x * y", params: &[], make: || Function3D::simple("product", |x, y| x * y) },
];

pub fn find<'a, F>(table: &'a [Entry<F>], name: &str) -> Option<&'a Entry<F>> {
    table.iter().find(|e| e.name == name)
}

/// Human-readable listing of both tables.
pub fn listing() -> String {
    let mut out = String::from("2D functions (plot):\n");
    for e in FUNCTIONS_2D {
        out.push_str(&line(e));
    }
    out.push_str("\n3D functions (plot3d):\n");
    for e in FUNCTIONS_3D {
        out.push_str(&line(e));
    }
    out
}

fn line<F>(e: &Entry<F>) -> String {
    let params = e.params.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>();
    if params.is_empty() {
        format!("  {:<12} {}\n", e.name, e.about)
    } else {
        format!("  {:<12} {}  [{}]\n", e.name, e.about, params.join(", "))
    }
}
