use crate::domain::model::Number;
use crate::utils::error::{CalcWeatherError, Result};

/// Stateless arithmetic over [`Number`] operands.
///
/// Integer operands stay integral unless the result overflows `i64`, in which
/// case the float result is returned. Any float operand yields a float.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        tracing::debug!("add({}, {})", a, b);
        combine(a, b, i64::checked_add, |x, y| x + y)
    }

    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        tracing::debug!("subtract({}, {})", a, b);
        combine(a, b, i64::checked_sub, |x, y| x - y)
    }

    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        tracing::debug!("multiply({}, {})", a, b);
        combine(a, b, i64::checked_mul, |x, y| x * y)
    }

    /// True division. Fails with [`CalcWeatherError::InvalidArgument`] when
    /// `b` is zero.
    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> Result<f64> {
        let (a, b) = (a.into(), b.into());
        tracing::debug!("divide({}, {})", a, b);

        if b.is_zero() {
            tracing::warn!("Rejected division of {} by zero", a);
            return Err(CalcWeatherError::invalid_argument("Cannot divide by zero"));
        }

        Ok(a.as_f64() / b.as_f64())
    }
}

fn combine(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => match int_op(x, y) {
            Some(v) => Number::Int(v),
            None => Number::Float(float_op(x as f64, y as f64)),
        },
        _ => Number::Float(float_op(a.as_f64(), b.as_f64())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn assert_almost_eq(actual: f64, expected: f64, places: i32) {
        let tolerance = 0.5 * 10f64.powi(-places);
        assert!(
            (actual - expected).abs() < tolerance,
            "{} != {} within {} places",
            actual,
            expected,
            places
        );
    }

    #[test]
    fn test_multiply() {
        let calc = Calculator::new();
        assert_eq!(calc.multiply(3, 5), Number::Int(15));
        assert_eq!(calc.multiply(-1, 5), Number::Int(-5));
    }

    #[test]
    fn test_multiply_with_float_operand_yields_float() {
        let calc = Calculator::new();
        assert_eq!(calc.multiply(2.5, 4), Number::Float(10.0));
        assert_eq!(calc.multiply(3, 0.5), Number::Float(1.5));
    }

    #[test]
    fn test_multiply_overflow_promotes_to_float() {
        let calc = Calculator::new();
        let result = calc.multiply(i64::MAX, 2);
        assert_eq!(result, Number::Float(i64::MAX as f64 * 2.0));
    }

    #[test]
    fn test_multiply_is_commutative() {
        let calc = Calculator::new();
        let pairs: [(Number, Number); 4] = [
            (3.into(), 5.into()),
            ((-7).into(), 0.25.into()),
            ((1e10).into(), (-3).into()),
            (i64::MAX.into(), 3.into()),
        ];
        for (a, b) in pairs {
            assert_eq!(calc.multiply(a, b), calc.multiply(b, a));
        }
    }

    #[test]
    fn test_divide() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(10, 2).unwrap(), 5.0);
        assert_almost_eq(calc.divide(10, 3).unwrap(), 3.3333, 4);
    }

    #[test]
    fn test_divide_by_zero_is_invalid_argument() {
        let calc = Calculator::new();
        for divisor in [Number::Int(0), Number::Float(0.0), Number::Float(-0.0)] {
            let err = calc.divide(10, divisor).unwrap_err();
            assert!(matches!(err, CalcWeatherError::InvalidArgument { .. }));
        }
        assert!(calc.divide(0, 0).is_err());
    }

    #[test]
    fn test_divide_then_multiply_recovers_dividend() {
        let calc = Calculator::new();
        let pairs: [(Number, Number); 4] = [
            (10.into(), 3.into()),
            ((-7.5).into(), 0.1.into()),
            (1.into(), (-9).into()),
            (123456789.into(), (1e-3).into()),
        ];
        for (a, b) in pairs {
            let quotient = calc.divide(a, b).unwrap();
            let recovered = quotient * b.as_f64();
            assert!((recovered - a.as_f64()).abs() <= 1e-9 * a.as_f64().abs().max(1.0));
        }
    }

    #[test]
    fn test_add_and_subtract() {
        let calc = Calculator::new();
        assert_eq!(calc.add(2, 3), Number::Int(5));
        assert_eq!(calc.subtract(2, 3), Number::Int(-1));
        assert_eq!(calc.add(0.5, 1), Number::Float(1.5));
        assert_eq!(calc.subtract(i64::MIN, 1), Number::Float(i64::MIN as f64 - 1.0));
    }

    #[test]
    fn test_every_operation_logs_its_operands() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let calc = Calculator::new();
            calc.add(2, 3);
            calc.subtract(7, 4);
            calc.multiply(3, 5);
            calc.divide(10, 2).unwrap();
        });

        let output = logs.contents();
        for line in ["add(2, 3)", "subtract(7, 4)", "multiply(3, 5)", "divide(10, 2)"] {
            assert!(output.contains(line), "missing '{}' in:\n{}", line, output);
        }
    }
}
