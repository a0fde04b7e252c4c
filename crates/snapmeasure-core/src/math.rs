//! 数学类型别名
//!
//! 所有坐标使用 f64。

pub type Point3 = nalgebra::Point3<f64>;
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// 几何比较容差
pub const EPSILON: f64 = 1e-10;

/// 一组点的算术平均，空集合返回 None
pub fn centroid<'a, I>(points: I) -> Option<Point3>
where
    I: IntoIterator<Item = &'a Point3>,
{
    let mut sum = Vector3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Point3::from(sum / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 4.0, 0.0),
            Point3::new(0.0, 4.0, 6.0),
        ];
        let c = centroid(&pts).unwrap();
        assert!((c - Point3::new(1.0, 2.0, 1.5)).norm() < EPSILON);
    }

    #[test]
    fn test_centroid_empty() {
        let pts: [Point3; 0] = [];
        assert!(centroid(&pts).is_none());
    }
}
