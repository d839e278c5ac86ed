/// A parsed math expression over one free variable `x`.
///
/// Evaluation is plain `f64` arithmetic; domain errors surface as NaN
/// or infinity and are filtered by the curve sampler, never raised.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(MathFn, Vec<Expr>),
}

/// The built-in function set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Sqrt,
    /// Two arguments: `log(base, value)`.
    Log,
    Abs,
}

impl MathFn {
    /// Number of arguments the function takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Log => 2,
            _ => 1,
        }
    }
}

impl Expr {
    /// Evaluate with the variable bound to `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Num(n) => *n,
            Self::Var => x,
            Self::Neg(e) => -e.eval(x),
            Self::Add(a, b) => a.eval(x) + b.eval(x),
            Self::Sub(a, b) => a.eval(x) - b.eval(x),
            Self::Mul(a, b) => a.eval(x) * b.eval(x),
            Self::Div(a, b) => a.eval(x) / b.eval(x),
            Self::Pow(a, b) => a.eval(x).powf(b.eval(x)),
            Self::Call(f, args) => match f {
                MathFn::Sin => args[0].eval(x).sin(),
                MathFn::Cos => args[0].eval(x).cos(),
                MathFn::Tan => args[0].eval(x).tan(),
                MathFn::Sqrt => args[0].eval(x).sqrt(),
                MathFn::Log => args[1].eval(x).log(args[0].eval(x)),
                MathFn::Abs => args[0].eval(x).abs(),
            },
        }
    }

    /// Whether the expression references the variable.
    pub fn contains_var(&self) -> bool {
        match self {
            Self::Num(_) => false,
            Self::Var => true,
            Self::Neg(e) => e.contains_var(),
            Self::Add(a, b) | Self::Sub(a, b) | Self::Mul(a, b) | Self::Div(a, b)
            | Self::Pow(a, b) => a.contains_var() || b.contains_var(),
            Self::Call(_, args) => args.iter().any(Self::contains_var),
        }
    }
}
