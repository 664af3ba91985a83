use bevy::{
    prelude::{Component, Vec2},
    reflect::Reflect,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePathError {
    #[error("point index {index} out of range for a path of {count} points")]
    OutOfRange { index: usize, count: usize },
}

/// Ordered outline of a freeform light, in the light's local space.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
pub struct ShapePath {
    points: Vec<Vec2>,
}

impl ShapePath {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Unit square a light starts from when it is switched to freeform.
    pub fn default_quad() -> Self {
        Self::new(vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ])
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Result<Vec2, ShapePathError> {
        self.check(index)?;
        Ok(self.points[index])
    }

    pub fn set(&mut self, index: usize, point: Vec2) -> Result<(), ShapePathError> {
        self.check(index)?;
        self.points[index] = point;
        Ok(())
    }

    /// Inserts before `index`; `index == count()` appends.
    pub fn insert(&mut self, index: usize, point: Vec2) -> Result<(), ShapePathError> {
        if index > self.points.len() {
            return Err(self.out_of_range(index));
        }
        self.points.insert(index, point);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Vec2, ShapePathError> {
        self.check(index)?;
        Ok(self.points.remove(index))
    }

    fn check(&self, index: usize) -> Result<(), ShapePathError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> ShapePathError {
        ShapePathError::OutOfRange {
            index,
            count: self.points.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> ShapePath {
        ShapePath::new(vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-1.0, -1.0),
        ])
    }

    #[test]
    fn accessors_reject_index_at_count() {
        let mut path = triangle();
        let expected = ShapePathError::OutOfRange { index: 3, count: 3 };

        assert_eq!(path.get(3), Err(expected));
        assert_eq!(path.set(3, Vec2::ZERO), Err(expected));
        assert_eq!(path.remove(3), Err(expected));
        assert_eq!(path.count(), 3);
    }

    #[test]
    fn insert_at_count_appends() {
        let mut path = triangle();
        path.insert(3, Vec2::new(5.0, 5.0)).unwrap();

        assert_eq!(path.count(), 4);
        assert_eq!(path.get(3).unwrap(), Vec2::new(5.0, 5.0));
        assert_eq!(
            path.insert(6, Vec2::ZERO),
            Err(ShapePathError::OutOfRange { index: 6, count: 4 })
        );
    }

    #[test]
    fn insert_and_remove_shift_neighbours() {
        let mut path = triangle();
        path.insert(1, Vec2::new(2.0, 0.0)).unwrap();
        assert_eq!(path.get(2).unwrap(), Vec2::new(1.0, -1.0));

        let removed = path.remove(0).unwrap();
        assert_eq!(removed, Vec2::new(0.0, 1.0));
        assert_eq!(path.get(0).unwrap(), Vec2::new(2.0, 0.0));
        assert_eq!(path.count(), 3);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut path = triangle();
        path.set(1, Vec2::new(4.0, 4.0)).unwrap();
        assert_eq!(path.points()[1], Vec2::new(4.0, 4.0));
        assert_eq!(path.count(), 3);
    }

    #[test]
    fn empty_path_has_nothing_to_get() {
        let path = ShapePath::default();
        assert_eq!(
            path.get(0),
            Err(ShapePathError::OutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn error_message_names_index_and_count() {
        let err = ShapePathError::OutOfRange { index: 7, count: 2 };
        assert_eq!(
            err.to_string(),
            "point index 7 out of range for a path of 2 points"
        );
    }
}
