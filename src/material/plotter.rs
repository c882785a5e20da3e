use crate::util::SweepResults;
use crate::StrError;
use plotpy::{Curve, Plot};
use std::ffi::OsStr;

/// Plots the stress-stretch and Jacobian-stretch curves of uniaxial sweeps
///
/// The figure has two subplots: (left) S1, S2, S3 versus λ3; and (right) J versus λ3.
/// The titles report the min/max values of the axial stress and the Jacobian.
pub struct Plotter {
    /// Do not draw the grid lines
    pub no_grid: bool,

    /// Holds the stress versus stretch curves
    curves_stress: Vec<Curve>,

    /// Holds the Jacobian versus stretch curves
    curves_jacobian: Vec<Curve>,

    /// Holds the range of axial stresses
    range_s3: Option<(f64, f64)>,

    /// Holds the range of Jacobians
    range_jacobian: Option<(f64, f64)>,
}

impl Plotter {
    /// Allocates a new instance
    pub fn new() -> Self {
        Plotter {
            no_grid: false,
            curves_stress: Vec::new(),
            curves_jacobian: Vec::new(),
            range_s3: None,
            range_jacobian: None,
        }
    }

    /// Draws the curves of a sweep
    ///
    /// **Note:** Nothing is drawn if the results have no states.
    pub fn draw(&mut self, results: &SweepResults) {
        if results.states.is_empty() {
            return;
        }
        let label = format!("{}", results.formulation);
        let x = results.lambda3();
        let s3 = results.s3();
        let jacobians = results.jacobians();

        let mut curve_s1 = Curve::new();
        let mut curve_s2 = Curve::new();
        let mut curve_s3 = Curve::new();
        curve_s1.set_label(&format!("{}: S1", label)).draw(&x, &results.s1());
        curve_s2
            .set_label(&format!("{}: S2", label))
            .set_line_style("--")
            .draw(&x, &results.s2());
        curve_s3.set_label(&format!("{}: S3", label)).draw(&x, &s3);
        self.curves_stress.push(curve_s1);
        self.curves_stress.push(curve_s2);
        self.curves_stress.push(curve_s3);

        let mut curve_jj = Curve::new();
        curve_jj.set_label(&label).draw(&x, &jacobians);
        self.curves_jacobian.push(curve_jj);

        self.range_s3 = merge_range(self.range_s3, SweepResults::min_max(&s3));
        self.range_jacobian = merge_range(self.range_jacobian, SweepResults::min_max(&jacobians));
    }

    /// Returns the title of the stress subplot
    pub fn title_stress(&self) -> String {
        match self.range_s3 {
            Some((min, max)) => format!("S3: min = {:.4}, max = {:.4}", min, max),
            None => "S3".to_string(),
        }
    }

    /// Returns the title of the Jacobian subplot
    pub fn title_jacobian(&self) -> String {
        match self.range_jacobian {
            Some((min, max)) => format!("J: min = {:.6}, max = {:.6}", min, max),
            None => "J".to_string(),
        }
    }

    /// Saves the figure
    ///
    /// **Note:** Call this function after [Plotter::draw()].
    ///
    /// # Input
    ///
    /// * `filepath` -- may be a String, &str, or Path
    pub fn save<P>(&self, filepath: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        if self.curves_stress.is_empty() {
            return Err("there are no curves to plot");
        }
        let mut plot = Plot::new();
        plot.set_subplot(1, 2, 1);
        for curve in &self.curves_stress {
            plot.add(curve);
        }
        plot.set_title(&self.title_stress());
        if self.no_grid {
            plot.set_label_x("λ3").set_label_y("stress");
        } else {
            plot.grid_and_labels("λ3", "stress");
        }
        plot.legend();
        plot.set_subplot(1, 2, 2);
        for curve in &self.curves_jacobian {
            plot.add(curve);
        }
        plot.set_title(&self.title_jacobian());
        if self.no_grid {
            plot.set_label_x("λ3").set_label_y("J");
        } else {
            plot.grid_and_labels("λ3", "J");
        }
        plot.legend();
        plot.set_figure_size_points(800.0, 350.0).save(filepath)
    }
}

/// Merges two optional (min, max) ranges
fn merge_range(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some((a_min, a_max)), Some((b_min, b_max))) => Some((f64::min(a_min, b_min), f64::max(a_max, b_max))),
        (Some(r), None) | (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
