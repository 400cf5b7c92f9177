use crate::models::Recommendation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Segment fills, assigned in recommendation order and cycled past the end.
pub const PALETTE: [Rgba; 3] = [
    Rgba::new(63, 81, 181, 0.8),
    Rgba::new(245, 0, 87, 0.8),
    Rgba::new(33, 150, 243, 0.8),
];

const BORDER_WIDTH: u8 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    pub value: f64,
    pub background: Rgba,
    pub border: Rgba,
}

impl ChartSegment {
    pub fn tooltip(&self) -> String {
        format!(" {}: {}%", self.label, self.value)
    }
}

/// Proportion (doughnut) chart data. Values are the raw probabilities; they
/// are not normalized to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub segments: Vec<ChartSegment>,
    pub border_width: u8,
}

impl ChartData {
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let segments = recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                let background = PALETTE[i % PALETTE.len()];
                ChartSegment {
                    label: rec.career.clone(),
                    value: rec.probability,
                    background,
                    border: background.opaque(),
                }
            })
            .collect();

        Self {
            segments,
            border_width: BORDER_WIDTH,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.segments.iter().map(|s| s.value).collect()
    }

    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(career: &str, probability: f64) -> Recommendation {
        Recommendation {
            career: career.to_string(),
            probability,
        }
    }

    #[test]
    fn test_two_segments_keep_order_without_normalizing() {
        let chart = ChartData::from_recommendations(&[
            rec("Software Engineer", 92.0),
            rec("Data Scientist", 61.0),
        ]);
        assert_eq!(chart.segments.len(), 2);
        assert_eq!(chart.labels(), vec!["Software Engineer", "Data Scientist"]);
        assert_eq!(chart.values(), vec![92.0, 61.0]);
        assert_eq!(chart.total(), 153.0);
    }

    #[test]
    fn test_colors_follow_list_order_and_cycle() {
        let chart = ChartData::from_recommendations(&[
            rec("A", 10.0),
            rec("B", 20.0),
            rec("C", 30.0),
            rec("D", 40.0),
        ]);
        assert_eq!(chart.segments[0].background, PALETTE[0]);
        assert_eq!(chart.segments[2].background, PALETTE[2]);
        assert_eq!(chart.segments[3].background, PALETTE[0]);
        assert_eq!(chart.segments[1].border.css(), "rgba(245, 0, 87, 1)");
        assert_eq!(chart.segments[1].background.css(), "rgba(245, 0, 87, 0.8)");
    }

    #[test]
    fn test_tooltip_label() {
        let chart = ChartData::from_recommendations(&[rec("Teacher", 45.5)]);
        assert_eq!(chart.segments[0].tooltip(), " Teacher: 45.5%");
    }

    #[test]
    fn test_no_recommendations_gives_empty_chart() {
        let chart = ChartData::from_recommendations(&[]);
        assert!(chart.is_empty());
        assert_eq!(chart.total(), 0.0);
    }
}
