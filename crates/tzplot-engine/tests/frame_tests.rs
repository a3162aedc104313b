use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tzplot_engine::format::text_width;
use tzplot_engine::{
    Context, Error, NOW_MARKER, Plotter, RecordingSurface, Zone, plot_static,
};
use tzplot_types::{
    Color, Config, DaySegment, Location, NamedColor, PaletteTarget, PlotRequest, SortMode,
    Sorting, Style, SymbolMode,
};

fn reference() -> DateTime<Utc> {
    // 1985-08-24T16:00:00+02:00
    Utc.with_ymd_and_hms(1985, 8, 24, 14, 0, 0).unwrap()
}

fn utc() -> Zone {
    Zone::Named(Tz::UTC)
}

fn render(config: &Config, width: usize) -> RecordingSurface {
    let plotter = Plotter::new(config, utc(), PaletteTarget::Static).unwrap();
    let mut surface = RecordingSurface::new();
    plotter
        .render(&PlotRequest::now_at(reference()), width, &mut surface)
        .unwrap();
    surface
}

#[test]
fn test_narrow_frame_exact_output() {
    let config = Config {
        tics: true,
        ..Config::minimal()
    };
    let surface = render(&config, 24);

    assert_eq!(
        surface.lines(),
        vec![
            "        now v 14:00",
            "Local: Sat 24 Aug 1985 14:00",
            "    ▒▒██████|███▒▒▒▒    ",
            " ^  ^  ^  ^  ^  ^  ^  ^ ",
            " 3  6  9  12 15 18 21 0 ",
        ]
    );
}

#[test]
fn test_berlin_scenario_marker_column() {
    let config = Config::minimal().with_timezones(vec![Location::new("Berlin", "Europe/Berlin")]);
    let surface = render(&config, 72);
    let lines = surface.lines();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], format!("{:<36}|", "Local : Sat 24 Aug 1985 14:00"));
    assert_eq!(lines[3], format!("{:<36}|", "Berlin: Sat 24 Aug 1985 16:00"));

    for header in [&lines[1], &lines[3]] {
        assert_eq!(header.chars().nth(36), Some('|'));
        assert_eq!(header.chars().count(), 37);
    }

    let berlin_row = &surface.rows[4];
    assert_eq!(berlin_row.len(), 72);
    assert_eq!(berlin_row[36].text, NOW_MARKER);
    assert_eq!(lines[4].chars().nth(36), Some('|'));
}

#[test]
fn test_berlin_row_is_shifted_by_offset() {
    let config = Config::minimal().with_timezones(vec![Location::new("Berlin", "Europe/Berlin")]);
    let surface = render(&config, 72);
    let local: Vec<char> = surface.lines()[2].chars().collect();
    let berlin: Vec<char> = surface.lines()[4].chars().collect();

    // Two hours at three columns per hour
    for column in 6..72 {
        if column == 36 || column - 6 == 36 {
            continue;
        }
        assert_eq!(berlin[column - 6], local[column], "column {}", column);
    }
}

#[test]
fn test_mono_colorized_row() {
    let config = Config {
        style: Style {
            symbols: SymbolMode::Mono,
            colorize: true,
            ..Style::default()
        },
        ..Config::minimal()
    };
    let surface = render(&config, 48);
    let row = &surface.rows[2];
    assert_eq!(row.len(), 48);

    for (column, cell) in row.iter().enumerate() {
        if column == 24 {
            assert_eq!(cell.text, "|");
            assert_eq!(cell.style.fg, None);
            continue;
        }
        assert_eq!(cell.text, "#");
        let Context::Segment(segment) = cell.style.context else {
            panic!("column {} is not a segment cell", column);
        };
        let expected = match segment {
            DaySegment::Morning | DaySegment::Evening => NamedColor::Red,
            DaySegment::Day => NamedColor::Yellow,
            DaySegment::Night => NamedColor::Blue,
        };
        assert_eq!(cell.style.fg, Some(Color::Named(expected)));
    }
}

#[test]
fn test_colorize_off_leaves_cells_plain() {
    let surface = render(&Config::minimal(), 48);
    assert!(surface.rows[2].iter().all(|cell| cell.style.fg.is_none()));
}

#[test]
fn test_render_is_deterministic() {
    let config = Config {
        tics: true,
        ..Config::default()
    };
    let first = render(&config, 90);
    let second = render(&config, 90);
    assert_eq!(first.rows, second.rows);
}

#[test]
fn test_unknown_zone_aborts_before_drawing() {
    let config = Config::minimal().with_timezones(vec![Location::new("Atlantis", "Ocean/Atlantis")]);
    let plotter = Plotter::new(&config, utc(), PaletteTarget::Static).unwrap();
    let mut surface = RecordingSurface::new();
    let err = plotter
        .render(&PlotRequest::now_at(reference()), 72, &mut surface)
        .unwrap_err();

    assert!(matches!(err, Error::UnknownZone { .. }));
    assert_eq!(surface.calls(), 0);
}

#[test]
fn test_invalid_custom_table_is_rejected() {
    let config = Config {
        style: Style {
            symbols: SymbolMode::Custom,
            custom_symbols: vec!["x".to_string(); 12],
            ..Style::default()
        },
        ..Config::minimal()
    };
    let err = Plotter::new(&config, utc(), PaletteTarget::Static).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_custom_symbol_wider_than_a_column_is_rejected() {
    let mut symbols: Vec<String> = (0..24).map(|h| (h % 10).to_string()).collect();
    symbols[3] = String::new();
    let config = Config {
        style: Style {
            symbols: SymbolMode::Custom,
            custom_symbols: symbols,
            ..Style::default()
        },
        ..Config::minimal()
    };
    let err = Plotter::new(&config, utc(), PaletteTarget::Static).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(tzplot_types::Error::InvalidSymbol { hour: 3, .. })
    ));
}

/// Display column of the first now marker in `line`.
fn marker_column(line: &str) -> Option<usize> {
    line.find(NOW_MARKER).map(|index| text_width(&line[..index]))
}

#[test]
fn test_marker_aligned_in_every_symbol_mode() {
    let modes = [
        SymbolMode::Rectangles,
        SymbolMode::SunMoon,
        SymbolMode::Mono,
        SymbolMode::Blocks,
        SymbolMode::Clocks,
    ];
    for symbols in modes {
        let config = Config {
            style: Style {
                symbols,
                ..Style::default()
            },
            ..Config::minimal().with_timezones(vec![Location::new("Berlin", "Europe/Berlin")])
        };
        let lines = render(&config, 72).lines();

        for line in &lines[1..] {
            assert_eq!(marker_column(line), Some(36), "{}: {:?}", symbols, line);
        }
        assert_eq!(text_width(&lines[2]), 72, "{}", symbols);
        assert_eq!(text_width(&lines[4]), 72, "{}", symbols);
    }
}

#[test]
fn test_sorted_rows() {
    let config = Config {
        sorting: Sorting {
            mode: SortMode::Name,
            pin_local: true,
        },
        ..Config::default()
    };
    let surface = render(&config, 72);
    let names: Vec<String> = surface
        .lines()
        .iter()
        .skip(1)
        .step_by(2)
        .map(|line| line.split(':').next().unwrap_or_default().trim().to_string())
        .collect();

    assert_eq!(names, vec!["Local", "Berlin", "New York", "Shanghai", "Sydney"]);
}

#[test]
fn test_plot_static_clamps_width() {
    let config = Config::minimal();
    let mut surface = RecordingSurface::new();
    let summary = plot_static(
        &config,
        utc(),
        &PlotRequest::at(reference()),
        Some(10),
        &mut surface,
    )
    .unwrap();

    assert_eq!(summary.width, 72);
    assert_eq!(summary.now_slot, 36);
    assert_eq!(summary.rows, 3);
    assert!(surface.lines()[0].ends_with("time v 14:00"));
}

#[test]
fn test_unstretched_width_rounds_down() {
    let config = Config::minimal();
    let surface = render(&config, 100);
    assert_eq!(surface.rows[2].len(), 96);

    let stretched = Config {
        stretch: true,
        ..Config::minimal()
    };
    let surface = render(&stretched, 100);
    assert_eq!(surface.rows[2].len(), 100);
}

#[test]
fn test_live_target_uses_dynamic_palette() {
    let mut config = Config {
        style: Style {
            symbols: SymbolMode::Blocks,
            colorize: true,
            ..Style::default()
        },
        ..Config::minimal()
    };
    config.style.coloring.dynamic_day = "#ffaa00".to_string();
    config.style.coloring.dynamic_background = "16".to_string();

    let plotter = Plotter::new(&config, utc(), PaletteTarget::Live).unwrap();
    let mut surface = RecordingSurface::new();
    plotter
        .render(&PlotRequest::now_at(reference()), 48, &mut surface)
        .unwrap();

    // 14:00 UTC is day time
    let day_cell = &surface.rows[2][23];
    assert_eq!(day_cell.text, "█");
    assert_eq!(day_cell.style.fg, Some(Color::Rgb(0xff, 0xaa, 0x00)));
    assert_eq!(day_cell.style.bg, Some(Color::Indexed(16)));
    assert_eq!(plotter.background_style().bg, Some(Color::Indexed(16)));
}
