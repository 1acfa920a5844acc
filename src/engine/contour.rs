// ==========================================
// 轧制道次仿真编排系统 - 轮廓定位
// ==========================================
// 职责: 把求解器返回的局部轮廓定位到机架坐标系,供绘图使用
// 约定:
// - 二辊: 上辊 = 孔型线上移 gap/2, 下辊 = 上辊关于 y=0 镜像
// - N 辊: 孔型线上移 ICD/2 后按 k·2π/N 旋转
// - 轧制方向旋转整个坐标系: horizontal 0, vertical π/2, Y 0, AntiY π
// ==========================================

use crate::domain::report::{ContourXY, RollContour};
use crate::domain::solved::Contour;
use crate::domain::types::{ThreeRollOrientation, TwoRollOrientation};
use crate::domain::unit::RollPassLayout;
use std::f64::consts::{FRAC_PI_2, PI};

/// 机架坐标系旋转角（弧度）
pub fn frame_rotation(layout: &RollPassLayout) -> f64 {
    match layout {
        RollPassLayout::TwoRoll { orientation, .. } => match orientation {
            TwoRollOrientation::Horizontal => 0.0,
            TwoRollOrientation::Vertical => FRAC_PI_2,
        },
        RollPassLayout::ThreeRoll { orientation, .. } => match orientation {
            ThreeRollOrientation::Y => 0.0,
            ThreeRollOrientation::AntiY => PI,
        },
    }
}

/// 绕原点旋转
pub fn rotate(contour: &Contour, angle: f64) -> Contour {
    if angle == 0.0 {
        return contour.clone();
    }
    let (sin, cos) = angle.sin_cos();
    contour.map(|(x, y)| (x * cos - y * sin, x * sin + y * cos))
}

/// 沿 y 平移
pub fn shift_y(contour: &Contour, dy: f64) -> Contour {
    contour.map(|(x, y)| (x, y + dy))
}

/// 关于 y=0 镜像
pub fn mirror_y(contour: &Contour) -> Contour {
    contour.map(|(x, y)| (x, -y))
}

/// 定位全部轧辊的孔型轮廓
///
/// # 参数
/// - groove_line: 单辊孔型线（局部坐标）
/// - layout: 机架布置（辊缝/内切圆直径 + 轧制方向）
pub fn place_roll_contour(groove_line: &Contour, layout: &RollPassLayout) -> RollContour {
    let frame = frame_rotation(layout);

    match layout {
        RollPassLayout::TwoRoll { gap, .. } => {
            let upper = shift_y(groove_line, gap / 2.0);
            let lower = mirror_y(&upper);
            RollContour::TwoRoll {
                upper: ContourXY::from(&rotate(&upper, frame)),
                lower: ContourXY::from(&rotate(&lower, frame)),
            }
        }
        RollPassLayout::ThreeRoll {
            inscribed_circle_diameter,
            ..
        } => {
            let roll_count = layout.roll_count();
            let first = shift_y(groove_line, inscribed_circle_diameter / 2.0);
            let contours = (0..roll_count)
                .map(|k| {
                    let angle = k as f64 * 2.0 * PI / roll_count as f64 + frame;
                    ContourXY::from(&rotate(&first, angle))
                })
                .collect();
            RollContour::MultiRoll { contours }
        }
    }
}

/// 定位轧件断面边界（随机架坐标系旋转）
pub fn place_profile_contour(contour: &Contour, layout: &RollPassLayout) -> ContourXY {
    ContourXY::from(&rotate(contour, frame_rotation(layout)))
}

/// 闭合多边形面积（鞋带公式,取绝对值）
pub fn polygon_area(contour: &Contour) -> f64 {
    let points = &contour.points;
    if points.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|((x1, y1), (x2, y2))| x1 * y2 - x2 * y1)
        .sum();

    twice_area.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn line() -> Contour {
        Contour::new(vec![(-0.02, 0.0), (0.0, 0.005), (0.02, 0.0)])
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{} != {}", a, b);
    }

    #[test]
    fn test_two_roll_upper_and_lower_are_mirrored() {
        let layout = RollPassLayout::TwoRoll {
            gap: 0.01,
            orientation: TwoRollOrientation::Horizontal,
        };

        match place_roll_contour(&line(), &layout) {
            RollContour::TwoRoll { upper, lower } => {
                assert_eq!(upper.x, vec![-0.02, 0.0, 0.02]);
                assert_close(upper.y[1], 0.01);
                assert_close(upper.y[0], 0.005);
                for (u, l) in upper.y.iter().zip(lower.y.iter()) {
                    assert_close(*u, -*l);
                }
            }
            other => panic!("Expected TwoRoll, got {:?}", other),
        }
    }

    #[test]
    fn test_vertical_two_roll_is_rotated_quarter_turn() {
        let layout = RollPassLayout::TwoRoll {
            gap: 0.01,
            orientation: TwoRollOrientation::Vertical,
        };
        let RollContour::TwoRoll { upper, .. } = place_roll_contour(&line(), &layout) else {
            panic!("Expected TwoRoll");
        };
        // (0, 0.01) → (-0.01, 0)
        assert_close(upper.x[1], -0.01);
        assert_close(upper.y[1], 0.0);
    }

    #[test]
    fn test_three_roll_contours_are_symmetric() {
        let layout = RollPassLayout::ThreeRoll {
            inscribed_circle_diameter: 0.03,
            orientation: ThreeRollOrientation::Y,
        };
        let contour = place_roll_contour(&Contour::new(vec![(0.0, 0.0)]), &layout);
        assert_eq!(contour.roll_count(), 3);

        let RollContour::MultiRoll { contours } = contour else {
            panic!("Expected MultiRoll");
        };
        for roll in &contours {
            let r = (roll.x[0].powi(2) + roll.y[0].powi(2)).sqrt();
            assert_close(r, 0.015);
        }
        assert_close(contours[0].x[0], 0.0);
        assert_close(contours[0].y[0], 0.015);
    }

    #[test]
    fn test_anti_y_flips_the_frame() {
        let layout = RollPassLayout::ThreeRoll {
            inscribed_circle_diameter: 0.03,
            orientation: ThreeRollOrientation::AntiY,
        };
        let RollContour::MultiRoll { contours } =
            place_roll_contour(&Contour::new(vec![(0.0, 0.0)]), &layout)
        else {
            panic!("Expected MultiRoll");
        };
        assert_close(contours[0].y[0], -0.015);
    }

    #[test]
    fn test_polygon_area_of_unit_square() {
        let square = Contour::new(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_close(polygon_area(&square), 1.0);
        assert_eq!(polygon_area(&Contour::new(vec![(0.0, 0.0), (1.0, 1.0)])), 0.0);
    }
}
