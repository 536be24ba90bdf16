#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_compare_by_coordinates() {
        assert_eq!(Point { x: 3, y: -2 }, Point { x: 3, y: -2 });
        assert_ne!(Point { x: 3, y: -2 }, Point { x: -2, y: 3 });
    }
}
