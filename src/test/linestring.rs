use geo_types::{line_string, LineString};

pub(crate) fn ls0() -> LineString {
    line_string![
        (x: -93.09, y: 44.94),
        (x: -93.26, y: 44.98)
    ]
}

pub(crate) fn ls1() -> LineString {
    line_string![
        (x: -93.31, y: 44.86),
        (x: -93.21, y: 44.88),
        (x: -93.12, y: 44.91)
    ]
}
