use navgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// For 4-directional unit-cost movement this never overestimates the true
/// obstacle-aware distance, which is what makes it a valid A* heuristic.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        let a = Point::new(1, 2);
        let b = Point::new(4, -2);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_is_symmetric() {
        for (a, b) in [
            (Point::new(0, 0), Point::new(3, 5)),
            (Point::new(-2, 7), Point::new(4, -1)),
            (Point::new(511, 511), Point::new(0, 0)),
        ] {
            assert_eq!(manhattan(a, b), manhattan(b, a));
        }
    }
}
