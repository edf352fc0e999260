//! Conversion options and their resolution into a pipeline of stages.

use crate::geom::arc::MAX_ACCURACY;

/// Selects the conversions applied to a path.
///
/// Options are combined with the `..ConversionOptions::DEFAULT` syntax:
///
/// ```
/// # extern crate pathdata_path;
/// use pathdata_path::ConversionOptions;
///
/// let options = ConversionOptions {
///     arc_to_cubic: true,
///     decimals: Some(2),
///     ..ConversionOptions::DEFAULT
/// };
///
/// let pipeline = options.resolve();
/// assert!(pipeline.to_absolute);
/// assert!(pipeline.arc_to_cubic);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ConversionOptions {
    /// `Some(true)` converts to absolute longhand commands made of lines and cubic bézier
    /// curves only. `Some(false)` disables every conversion.
    pub normalize: Option<bool>,
    /// Relative shorthand commands rounded to 3 decimals.
    pub optimize: bool,
    pub to_absolute: bool,
    pub to_relative: bool,
    pub to_longhands: bool,
    pub to_shorthands: bool,
    pub arc_to_cubic: bool,
    /// Replace the radii of arcs with the radii actually used to draw them.
    pub arc_param: bool,
    /// Number of cubic bézier curves per quarter of arc, between 1 and 64.
    pub arc_accuracy: u32,
    pub quadratic_to_cubic: bool,
    pub cubic_to_quadratic: bool,
    /// Maximum distance between a cubic bézier curve and its quadratic approximation.
    pub cubic_to_quadratic_precision: f64,
    pub line_to_cubic: bool,
    /// Number of fractional digits of the output, no rounding if `None`.
    pub decimals: Option<u32>,
    /// Report every syntax error instead of recovering from them.
    pub debug: bool,
}

impl ConversionOptions {
    pub const DEFAULT: ConversionOptions = ConversionOptions {
        normalize: None,
        optimize: false,
        to_absolute: true,
        to_relative: false,
        to_longhands: true,
        to_shorthands: false,
        arc_to_cubic: false,
        arc_param: false,
        arc_accuracy: 1,
        quadratic_to_cubic: false,
        cubic_to_quadratic: false,
        cubic_to_quadratic_precision: 0.1,
        line_to_cubic: false,
        decimals: None,
        debug: false,
    };

    /// Absolute longhand commands, arcs and quadratic curves being converted to cubic curves.
    pub fn normalized() -> Self {
        ConversionOptions {
            normalize: Some(true),
            ..ConversionOptions::DEFAULT
        }
    }

    /// Relative shorthand commands rounded to 3 decimals.
    pub fn optimized() -> Self {
        ConversionOptions {
            optimize: true,
            ..ConversionOptions::DEFAULT
        }
    }

    /// Keeps the commands as they are.
    pub fn unchanged() -> Self {
        ConversionOptions {
            normalize: Some(false),
            ..ConversionOptions::DEFAULT
        }
    }

    /// Applies the presets and the dependencies between the options.
    ///
    /// - `normalize: Some(true)` enables the conversion to absolute longhand commands and of
    ///   arcs and quadratic curves to cubic ones, and disables shorthands.
    /// - `optimize` enables relative and shorthand commands and rounds to 3 decimals.
    /// - `normalize: Some(false)` disables every conversion but rounding.
    /// - The geometric conversions require absolute coordinates.
    pub fn resolve(&self) -> Pipeline {
        let mut pipeline = Pipeline {
            to_absolute: self.to_absolute,
            to_longhands: self.to_longhands,
            arc_param: self.arc_param,
            arc_to_cubic: self.arc_to_cubic,
            arc_accuracy: self.arc_accuracy.clamp(1, MAX_ACCURACY),
            quadratic_to_cubic: self.quadratic_to_cubic,
            line_to_cubic: self.line_to_cubic,
            cubic_to_quadratic: self.cubic_to_quadratic,
            cubic_to_quadratic_precision: if self.cubic_to_quadratic_precision > 0.0 {
                self.cubic_to_quadratic_precision
            } else {
                ConversionOptions::DEFAULT.cubic_to_quadratic_precision
            },
            to_shorthands: self.to_shorthands,
            to_relative: self.to_relative,
            decimals: self.decimals,
        };

        match self.normalize {
            Some(true) => {
                pipeline.to_absolute = true;
                pipeline.to_longhands = true;
                pipeline.arc_to_cubic = true;
                pipeline.quadratic_to_cubic = true;
                pipeline.to_shorthands = false;
            }
            Some(false) => {
                return Pipeline {
                    decimals: self.decimals,
                    ..Pipeline::NONE
                };
            }
            None => {}
        }

        if self.optimize {
            pipeline.to_relative = true;
            pipeline.to_shorthands = true;
            pipeline.decimals = Some(3);
        }

        if pipeline.to_longhands
            || pipeline.arc_param
            || pipeline.arc_to_cubic
            || pipeline.quadratic_to_cubic
            || pipeline.line_to_cubic
            || pipeline.cubic_to_quadratic
        {
            pipeline.to_absolute = true;
        }

        pipeline
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions::DEFAULT
    }
}

/// The stages to run, in order, once the options are resolved.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pipeline {
    pub to_absolute: bool,
    pub to_longhands: bool,
    pub arc_param: bool,
    pub arc_to_cubic: bool,
    pub arc_accuracy: u32,
    pub quadratic_to_cubic: bool,
    pub line_to_cubic: bool,
    pub cubic_to_quadratic: bool,
    pub cubic_to_quadratic_precision: f64,
    pub to_shorthands: bool,
    pub to_relative: bool,
    pub decimals: Option<u32>,
}

impl Pipeline {
    /// No stage at all.
    pub const NONE: Pipeline = Pipeline {
        to_absolute: false,
        to_longhands: false,
        arc_param: false,
        arc_to_cubic: false,
        arc_accuracy: 1,
        quadratic_to_cubic: false,
        line_to_cubic: false,
        cubic_to_quadratic: false,
        cubic_to_quadratic_precision: 0.1,
        to_shorthands: false,
        to_relative: false,
        decimals: None,
    };

    /// Whether the values are rounded by the last coordinate or shorthand conversion
    /// rather than by a dedicated rounding stage.
    pub fn rounds_in_place(&self) -> bool {
        self.to_shorthands || self.to_relative
    }
}

#[test]
fn default_pipeline() {
    let pipeline = ConversionOptions::default().resolve();
    assert!(pipeline.to_absolute);
    assert!(pipeline.to_longhands);
    assert!(!pipeline.to_relative);
    assert!(!pipeline.arc_to_cubic);
    assert_eq!(pipeline.decimals, None);
}

#[test]
fn presets() {
    let normalized = ConversionOptions {
        to_shorthands: true,
        to_absolute: false,
        ..ConversionOptions::normalized()
    }
    .resolve();
    assert!(normalized.to_absolute);
    assert!(normalized.to_longhands);
    assert!(normalized.arc_to_cubic);
    assert!(normalized.quadratic_to_cubic);
    assert!(!normalized.to_shorthands);

    let optimized = ConversionOptions {
        decimals: Some(1),
        ..ConversionOptions::optimized()
    }
    .resolve();
    assert!(optimized.to_relative);
    assert!(optimized.to_shorthands);
    assert_eq!(optimized.decimals, Some(3));
    assert!(optimized.rounds_in_place());

    let unchanged = ConversionOptions {
        arc_to_cubic: true,
        optimize: true,
        decimals: Some(2),
        ..ConversionOptions::unchanged()
    }
    .resolve();
    assert_eq!(
        unchanged,
        Pipeline {
            decimals: Some(2),
            ..Pipeline::NONE
        }
    );
}

#[test]
fn geometric_stages_require_absolute_coordinates() {
    let pipeline = ConversionOptions {
        to_absolute: false,
        to_longhands: false,
        cubic_to_quadratic: true,
        cubic_to_quadratic_precision: -1.0,
        arc_accuracy: 0,
        ..ConversionOptions::DEFAULT
    }
    .resolve();

    assert!(pipeline.to_absolute);
    assert_eq!(pipeline.cubic_to_quadratic_precision, 0.1);
    assert_eq!(pipeline.arc_accuracy, 1);

    let relative = ConversionOptions {
        to_absolute: false,
        to_longhands: false,
        to_relative: true,
        ..ConversionOptions::DEFAULT
    }
    .resolve();
    assert!(!relative.to_absolute);
    assert!(relative.to_relative);
}

#[test]
fn arc_accuracy_is_clamped() {
    let pipeline = ConversionOptions {
        arc_to_cubic: true,
        arc_accuracy: u32::MAX / 2 + 1,
        ..ConversionOptions::DEFAULT
    }
    .resolve();

    assert_eq!(pipeline.arc_accuracy, MAX_ACCURACY);
}
