// File: crates/splot-core/src/function.rs
// Summary: Named function references and the single-vs-list plot input.

use std::fmt;
use std::sync::Arc;

use crate::params::Params;

type Eval2D = dyn Fn(f64, &Params) -> f64 + Send + Sync;
type Eval3D = dyn Fn(f64, f64, &Params) -> f64 + Send + Sync;

/// A function of one variable with a display name.
#[derive(Clone)]
pub struct Function2D {
    name: String,
    eval: Arc<Eval2D>,
}

impl Function2D {
    pub fn new(name: impl Into<String>, f: impl Fn(f64, &Params) -> f64 + Send + Sync + 'static) -> Self {
        Self { name: name.into(), eval: Arc::new(f) }
    }

    /// Wrap a parameterless function.
    pub fn simple(name: impl Into<String>, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(name, move |x, _| f(x))
    }

    pub fn name(&self) -> &str { &self.name }

    #[inline]
    pub fn eval(&self, x: f64, params: &Params) -> f64 { (self.eval)(x, params) }
}

impl fmt::Debug for Function2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function2D").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A function of two variables with a display name.
#[derive(Clone)]
pub struct Function3D {
    name: String,
    eval: Arc<Eval3D>,
}

impl Function3D {
    pub fn new(name: impl Into<String>, f: impl Fn(f64, f64, &Params) -> f64 + Send + Sync + 'static) -> Self {
        Self { name: name.into(), eval: Arc::new(f) }
    }

    pub fn simple(name: impl Into<String>, f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(name, move |x, y, _| f(x, y))
    }

    pub fn name(&self) -> &str { &self.name }

    #[inline]
    pub fn eval(&self, x: f64, y: f64, params: &Params) -> f64 { (self.eval)(x, y, params) }
}

impl fmt::Debug for Function3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function3D").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A function paired with the params it is evaluated with.
#[derive(Clone, Debug)]
pub struct FnGroup<F> {
    pub func: F,
    pub params: Params,
}

impl<F> FnGroup<F> {
    pub fn new(func: F, params: Params) -> Self { Self { func, params } }
}

impl<F> From<F> for FnGroup<F> {
    fn from(func: F) -> Self { Self { func, params: Params::new() } }
}

impl<F> From<(F, Params)> for FnGroup<F> {
    fn from((func, params): (F, Params)) -> Self { Self { func, params } }
}

/// Either one bare function or a list of groups to compare.
#[derive(Clone, Debug)]
pub enum PlotInput<F> {
    Single(F),
    Many(Vec<FnGroup<F>>),
}

impl<F> PlotInput<F> {
    pub fn many<G: Into<FnGroup<F>>>(groups: impl IntoIterator<Item = G>) -> Self {
        PlotInput::Many(groups.into_iter().map(Into::into).collect())
    }

    pub fn into_groups(self) -> Vec<FnGroup<F>> {
        match self {
            PlotInput::Single(f) => vec![FnGroup::from(f)],
            PlotInput::Many(groups) => groups,
        }
    }
}

impl From<Function2D> for PlotInput<Function2D> {
    fn from(f: Function2D) -> Self { PlotInput::Single(f) }
}

impl From<Function3D> for PlotInput<Function3D> {
    fn from(f: Function3D) -> Self { PlotInput::Single(f) }
}

impl<F> From<Vec<FnGroup<F>>> for PlotInput<F> {
    fn from(groups: Vec<FnGroup<F>>) -> Self { PlotInput::Many(groups) }
}

impl From<Vec<Function2D>> for PlotInput<Function2D> {
    fn from(fs: Vec<Function2D>) -> Self { PlotInput::many(fs) }
}

impl From<Vec<Function3D>> for PlotInput<Function3D> {
    fn from(fs: Vec<Function3D>) -> Self { PlotInput::many(fs) }
}

impl From<Vec<(Function2D, Params)>> for PlotInput<Function2D> {
    fn from(fs: Vec<(Function2D, Params)>) -> Self { PlotInput::many(fs) }
}
