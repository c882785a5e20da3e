use crate::StrError;

/// Implements the piecewise cubic Hermite interpolating polynomial (PCHIP)
///
/// The derivatives at the data points are computed with the Fritsch-Carlson weighted harmonic mean,
/// which preserves the monotonicity of the data (no overshoot between points).
///
/// # Reference
///
/// * Fritsch FN and Carlson RE (1980) Monotone piecewise cubic interpolation.
///   SIAM Journal on Numerical Analysis, 17(2):238-246
/// * Moler C (2004) Numerical Computing with MATLAB, Chapter 3, SIAM
pub struct InterpPchip {
    /// Holds the (strictly increasing) x coordinates
    xx: Vec<f64>,

    /// Holds the y values
    yy: Vec<f64>,

    /// Holds the derivatives dy/dx at the data points
    dd: Vec<f64>,
}

impl InterpPchip {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `xx` -- the x coordinates; must be strictly increasing
    /// * `yy` -- the y values
    pub fn new(xx: &[f64], yy: &[f64]) -> Result<Self, StrError> {
        let npoint = xx.len();
        if npoint < 2 {
            return Err("at least two points are required for the interpolation");
        }
        if yy.len() != npoint {
            return Err("xx and yy must have the same length");
        }
        if xx.iter().chain(yy.iter()).any(|v| !v.is_finite()) {
            return Err("xx and yy must contain finite values");
        }
        if xx.windows(2).any(|w| w[1] <= w[0]) {
            return Err("xx must be strictly increasing");
        }

        // interval widths and slopes
        let hh: Vec<f64> = xx.windows(2).map(|w| w[1] - w[0]).collect();
        let delta: Vec<f64> = (0..npoint - 1).map(|i| (yy[i + 1] - yy[i]) / hh[i]).collect();

        // derivatives
        let mut dd = vec![0.0; npoint];
        if npoint == 2 {
            dd[0] = delta[0];
            dd[1] = delta[0];
        } else {
            for k in 1..npoint - 1 {
                if delta[k - 1] * delta[k] > 0.0 {
                    let w1 = 2.0 * hh[k] + hh[k - 1];
                    let w2 = hh[k] + 2.0 * hh[k - 1];
                    dd[k] = (w1 + w2) / (w1 / delta[k - 1] + w2 / delta[k]);
                }
            }
            let n = npoint - 1;
            dd[0] = end_derivative(hh[0], hh[1], delta[0], delta[1]);
            dd[n] = end_derivative(hh[n - 1], hh[n - 2], delta[n - 1], delta[n - 2]);
        }
        Ok(InterpPchip {
            xx: xx.to_vec(),
            yy: yy.to_vec(),
            dd,
        })
    }

    /// Returns the range of x coordinates (x_min, x_max)
    pub fn range(&self) -> (f64, f64) {
        (self.xx[0], self.xx[self.xx.len() - 1])
    }

    /// Evaluates the interpolant at x
    ///
    /// **Note:** No extrapolation is performed; x must be within the range of the data.
    pub fn eval(&self, x: f64) -> Result<f64, StrError> {
        let (x_min, x_max) = self.range();
        if !(x >= x_min && x <= x_max) {
            return Err("x is outside the range of the interpolation data");
        }
        let npoint = self.xx.len();
        let i = usize::min(self.xx.partition_point(|v| *v <= x), npoint - 1);
        let k = if i == 0 { 0 } else { i - 1 };
        let h = self.xx[k + 1] - self.xx[k];
        let t = (x - self.xx[k]) / h;
        let (t2, t3) = (t * t, t * t * t);
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        Ok(h00 * self.yy[k] + h10 * h * self.dd[k] + h01 * self.yy[k + 1] + h11 * h * self.dd[k + 1])
    }
}

/// Computes the shape-preserving one-sided three-point derivative at an end point
fn end_derivative(h0: f64, h1: f64, del0: f64, del1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * del0 - h0 * del1) / (h0 + h1);
    if d * del0 <= 0.0 {
        0.0
    } else if del0 * del1 < 0.0 && f64::abs(d) > f64::abs(3.0 * del0) {
        3.0 * del0
    } else {
        d
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::InterpPchip;
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            InterpPchip::new(&[1.0], &[1.0]).err(),
            Some("at least two points are required for the interpolation")
        );
        assert_eq!(
            InterpPchip::new(&[1.0, 2.0], &[1.0]).err(),
            Some("xx and yy must have the same length")
        );
        assert_eq!(
            InterpPchip::new(&[1.0, f64::NAN], &[1.0, 2.0]).err(),
            Some("xx and yy must contain finite values")
        );
        assert_eq!(
            InterpPchip::new(&[1.0, 1.0, 2.0], &[1.0, 2.0, 3.0]).err(),
            Some("xx must be strictly increasing")
        );
    }

    #[test]
    fn eval_captures_errors() {
        let interp = InterpPchip::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_eq!(interp.range(), (0.0, 2.0));
        assert_eq!(
            interp.eval(-0.1).err(),
            Some("x is outside the range of the interpolation data")
        );
        assert_eq!(
            interp.eval(f64::NAN).err(),
            Some("x is outside the range of the interpolation data")
        );
    }

    #[test]
    fn eval_reproduces_data_points() {
        let xx = [0.0, 0.5, 1.5, 2.0, 4.0];
        let yy = [1.0, 3.0, 2.0, 2.5, -1.0];
        let interp = InterpPchip::new(&xx, &yy).unwrap();
        for i in 0..xx.len() {
            approx_eq(interp.eval(xx[i]).unwrap(), yy[i], 1e-15);
        }
    }

    #[test]
    fn eval_reproduces_linear_functions() {
        let xx = [-1.0, -0.2, 0.3, 1.0, 2.5];
        let yy: Vec<_> = xx.iter().map(|x| 3.0 * x - 1.0).collect();
        let interp = InterpPchip::new(&xx, &yy).unwrap();
        for x in [-1.0, -0.7, 0.0, 0.123, 0.9, 2.0, 2.5] {
            approx_eq(interp.eval(x).unwrap(), 3.0 * x - 1.0, 1e-14);
        }
        let interp = InterpPchip::new(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        approx_eq(interp.eval(0.5).unwrap(), 2.0, 1e-15);
    }

    #[test]
    fn eval_preserves_monotonicity() {
        // step-like data would make a standard cubic spline overshoot
        let xx = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let yy = [0.0, 0.0, 0.1, 1.0, 1.0, 1.0];
        let interp = InterpPchip::new(&xx, &yy).unwrap();
        let mut previous = interp.eval(0.0).unwrap();
        let n = 101;
        for i in 1..n {
            let x = 5.0 * (i as f64) / ((n - 1) as f64);
            let y = interp.eval(x).unwrap();
            assert!(y >= previous - 1e-15);
            assert!(y >= -1e-15 && y <= 1.0 + 1e-15);
            previous = y;
        }
    }

    #[test]
    fn eval_approximates_smooth_functions() {
        let n = 41;
        let xx: Vec<_> = (0..n).map(|i| 1.0 + (i as f64) / ((n - 1) as f64)).collect();
        let yy: Vec<_> = xx.iter().map(|x| f64::ln(*x)).collect();
        let interp = InterpPchip::new(&xx, &yy).unwrap();
        for x in [1.01, 1.333, 1.5, 1.77, 1.999] {
            approx_eq(interp.eval(x).unwrap(), f64::ln(x), 1e-5);
        }
    }
}
