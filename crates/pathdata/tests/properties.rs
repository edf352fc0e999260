use pathdata::geom::CubicBezierSegment;
use pathdata::math::point;
use pathdata::path::{CommandKind, ConversionOptions, Path};
use pathdata::svg::{parse, parse_with_options, to_path_string, Diagnostic};

const MIXED: &str = "M10 10 l20 0 c5 5 10 5 15 0 s10 -5 15 0 q5 5 10 0 t10 0 a5 5 0 0 1 10 0 v10 h-10 z \
                     m5 5 L40 40 H20 V30 C25 35 30 35 35 30 S45 25 50 30 Q55 35 60 30 T70 30 A5 5 0 1 0 80 30 Z";

fn string(path: &Path) -> String {
    to_path_string(path, Some(6), false)
}

#[test]
fn absolute_relative_round_trip() {
    let path = parse(MIXED).unwrap();
    let absolute = path.to_absolute(None);

    assert!(!absolute.has_relative());
    assert_eq!(
        string(&absolute.to_relative(None).to_absolute(None)),
        string(&absolute)
    );
    assert_eq!(string(&absolute.to_absolute(None)), string(&absolute));
}

#[test]
fn relative_paths_keep_the_initial_move_to_absolute() {
    let relative = parse(MIXED).unwrap().to_relative(None);

    assert!(!relative.commands()[0].is_relative());
    assert!(relative.iter().skip(1).all(|cmd| cmd.is_relative()));
}

#[test]
fn conversions_are_idempotent() {
    let presets = [
        ConversionOptions::DEFAULT,
        ConversionOptions::normalized(),
        ConversionOptions::unchanged(),
    ];

    for options in &presets {
        let once = parse_with_options(MIXED, options).unwrap();
        let twice = once.convert(options);
        assert_eq!(string(&twice), string(&once));
    }
}

#[test]
fn shorthand_round_trip() {
    let path = parse(
        "M0 0 L10 0 L10 10 C15 15 20 15 25 10 C30 5 35 5 40 10 Q45 15 50 10 Q55 5 60 10",
    )
    .unwrap();

    let shorthands = path.to_shorthands(None);
    assert_eq!(
        to_path_string(&shorthands, None, false),
        "M0 0H10V10C15 15 20 15 25 10S35 5 40 10Q45 15 50 10T60 10"
    );

    assert_eq!(
        string(&shorthands.to_longhands(None)),
        string(&path.to_longhands(None))
    );
}

#[test]
fn normalized_paths_only_contain_basic_commands() {
    let path = parse_with_options(MIXED, &ConversionOptions::normalized()).unwrap();

    for cmd in path.iter() {
        assert!(!cmd.is_relative());
        assert!(matches!(
            cmd.kind(),
            CommandKind::MoveTo
                | CommandKind::LineTo
                | CommandKind::CubicCurveTo
                | CommandKind::ClosePath
        ));
    }
}

#[test]
fn quarter_arc_fidelity() {
    let options = ConversionOptions {
        arc_to_cubic: true,
        ..ConversionOptions::DEFAULT
    };
    let path = parse_with_options("M50 0 A50 50 0 0 1 0 50", &options).unwrap();

    assert_eq!(path.len(), 2);
    let cmd = &path.commands()[1];
    assert_eq!(cmd.kind(), CommandKind::CubicCurveTo);

    let v = cmd.values();
    let curve = CubicBezierSegment {
        from: point(50.0, 0.0),
        ctrl1: point(v[0], v[1]),
        ctrl2: point(v[2], v[3]),
        to: point(v[4], v[5]),
    };

    let mid = curve.sample(0.5);
    let half_sqrt2 = 50.0 * std::f64::consts::FRAC_1_SQRT_2;
    assert!((mid.x - half_sqrt2).abs() < 0.01);
    assert!((mid.y - half_sqrt2).abs() < 0.01);
    assert!((curve.to.x - 0.0).abs() < 1e-9);
    assert!((curve.to.y - 50.0).abs() < 1e-9);
}

#[test]
fn straight_cubic_to_single_quadratic() {
    let options = ConversionOptions {
        cubic_to_quadratic: true,
        cubic_to_quadratic_precision: 0.1,
        ..ConversionOptions::DEFAULT
    };
    let path = parse_with_options("M0 0 C10 0 20 0 30 0", &options).unwrap();

    assert_eq!(path.len(), 2);
    let quad = &path.commands()[1];
    assert_eq!(quad.kind(), CommandKind::QuadraticCurveTo);
    assert_eq!(quad.end_point(), Some(point(30.0, 0.0)));
}

#[test]
fn implicit_line_decomposition() {
    let path = parse("M0 0L1 1 2 2Z").unwrap();

    let kinds: Vec<CommandKind> = path.iter().map(|cmd| cmd.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            CommandKind::MoveTo,
            CommandKind::LineTo,
            CommandKind::LineTo,
            CommandKind::ClosePath,
        ]
    );
    assert_eq!(path.commands()[2].values(), &[2.0, 2.0]);
}

#[test]
fn compact_arc_flags() {
    let path = parse("M0 0A5 5 0 1110 10").unwrap();

    let arc = &path.commands()[1];
    assert_eq!(arc.kind(), CommandKind::ArcTo);
    let flags = arc.arc_flags().unwrap();
    assert!(flags.large_arc);
    assert!(flags.sweep);
    assert_eq!(arc.end_point(), Some(point(10.0, 10.0)));
}

#[test]
fn missing_move_to() {
    let err = parse("L1 1").unwrap_err();

    assert_eq!(err.diagnostics.len(), 1);
    assert!(matches!(
        err.diagnostics[0],
        Diagnostic::MissingMoveTo { command: 'L', .. }
    ));
    assert_eq!(err.path(), Path::sentinel());
}

#[test]
fn minified_output_parses_back() {
    let path = parse_with_options(MIXED, &ConversionOptions::optimized()).unwrap();
    let minified = to_path_string(&path, Some(3), true);

    assert!(minified.len() < to_path_string(&path, Some(3), false).len());
    assert_eq!(string(&parse(&minified).unwrap()), string(&path));
}

#[test]
fn huge_arc_accuracy() {
    let options = ConversionOptions {
        arc_to_cubic: true,
        arc_accuracy: u32::MAX / 2 + 1,
        ..ConversionOptions::DEFAULT
    };
    let path = parse_with_options("M0 0 A50 50 0 0 1 100 0", &options).unwrap();

    // A half circle is two quarters.
    assert_eq!(path.len(), 1 + 2 * pathdata::geom::arc::MAX_ACCURACY as usize);
    assert_eq!(path.commands()[path.len() - 1].end_point(), Some(point(100.0, 0.0)));
}
