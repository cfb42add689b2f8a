// ABOUTME: Chart composition seam and the default six-panel dashboard payload builder
// ABOUTME: Emits renderer-agnostic series data; styling is left to the client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard Charts
//!
//! A [`ChartComposer`] turns a profile, its master-table row, and the user's
//! fitness-level peers into a [`ChartPayload`]. The payload carries only data:
//! panel kinds, labelled series, and indicator ranges. Any renderer can draw it.

use crate::master_table::UserRecord;
use crate::profile::UserProfile;
use crate::progress::{ProgressTracker, TREND_WEEKS};
use pierre_core::constants::time::DAYS_PER_WEEK;
use pierre_core::errors::AppResult;
use serde::Serialize;

/// Target nightly sleep shown next to the user's average
const SLEEP_TARGET_HOURS: f64 = 8.0;

/// Builds chart payloads for the dashboard endpoint
pub trait ChartComposer: Send + Sync {
    /// Compose the dashboard for one user
    ///
    /// # Errors
    ///
    /// Returns an error when the payload cannot be produced
    fn compose(
        &self,
        profile: &UserProfile,
        record: &UserRecord,
        peers: &[&UserRecord],
    ) -> AppResult<ChartPayload>;
}

/// X coordinate of a data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinate {
    /// Category label
    Label(String),
    /// Numeric position
    Value(f64),
}

/// One data point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// X coordinate
    pub x: Coordinate,
    /// Y value
    pub y: f64,
}

impl DataPoint {
    fn labelled(label: &str, y: f64) -> Self {
        Self {
            x: Coordinate::Label(label.to_owned()),
            y,
        }
    }

    const fn numeric(x: f64, y: f64) -> Self {
        Self {
            x: Coordinate::Value(x),
            y,
        }
    }
}

/// A named series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Series name
    pub name: String,
    /// Points in drawing order
    pub points: Vec<DataPoint>,
}

impl Series {
    fn new(name: &str, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.to_owned(),
            points,
        }
    }
}

/// Labelled range of an indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    /// Band label
    pub label: String,
    /// Inclusive lower bound
    pub from: f64,
    /// Upper bound
    pub to: f64,
}

/// Panel contents by chart kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelContent {
    /// Categorical bars
    Bar {
        /// Bar series
        series: Vec<Series>,
    },
    /// Single value on a banded scale
    Indicator {
        /// Displayed value
        value: f64,
        /// Scale minimum
        min: f64,
        /// Scale maximum
        max: f64,
        /// Scale bands
        bands: Vec<Band>,
    },
    /// Unconnected points
    Scatter {
        /// Point series
        series: Vec<Series>,
    },
    /// Connected points
    Line {
        /// Line series
        series: Vec<Series>,
    },
}

/// One dashboard panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    /// Stable panel identifier
    pub id: String,
    /// Panel title
    pub title: String,
    /// Panel contents
    #[serde(flatten)]
    pub content: PanelContent,
}

/// Chart-ready dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    /// Dashboard title
    pub title: String,
    /// Panels in layout order
    pub panels: Vec<ChartPanel>,
}

/// Default dashboard: activity overview, health score, peers, heart rate, sleep, trend
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardChartBuilder {
    progress: ProgressTracker,
}

impl DashboardChartBuilder {
    /// Builder whose health score trend uses the given tracker's seed
    #[must_use]
    pub const fn new(progress: ProgressTracker) -> Self {
        Self { progress }
    }

    fn activity_overview(record: &UserRecord) -> ChartPanel {
        // Scaled so the four bars share one axis
        let points = vec![
            DataPoint::labelled("Steps", record.total_steps as f64 / 1000.0),
            DataPoint::labelled("Calories", record.total_calories_burned / 10.0),
            DataPoint::labelled("Active Min", f64::from(record.total_active_minutes)),
            DataPoint::labelled("Sessions", f64::from(record.exercise_sessions) * 10.0),
        ];
        ChartPanel {
            id: "weekly_activity".into(),
            title: "Weekly Activity Overview".into(),
            content: PanelContent::Bar {
                series: vec![Series::new("Activity", points)],
            },
        }
    }

    fn health_score(record: &UserRecord) -> ChartPanel {
        let band = |label: &str, from: f64, to: f64| Band {
            label: label.into(),
            from,
            to,
        };
        ChartPanel {
            id: "health_score".into(),
            title: "Health Score".into(),
            content: PanelContent::Indicator {
                value: f64::from(record.metrics.health_score),
                min: 0.0,
                max: 100.0,
                bands: vec![
                    band("low", 0.0, 50.0),
                    band("moderate", 50.0, 80.0),
                    band("good", 80.0, 100.0),
                ],
            },
        }
    }

    fn activity_vs_peers(record: &UserRecord, peers: &[&UserRecord]) -> ChartPanel {
        let peer_points = peers
            .iter()
            .map(|peer| DataPoint::numeric(peer.total_steps as f64, peer.total_calories_burned))
            .collect();
        let user_point = vec![DataPoint::numeric(
            record.total_steps as f64,
            record.total_calories_burned,
        )];
        ChartPanel {
            id: "activity_vs_peers".into(),
            title: "Activity vs Peers".into(),
            content: PanelContent::Scatter {
                series: vec![
                    Series::new("Peers", peer_points),
                    Series::new("You", user_point),
                ],
            },
        }
    }

    fn heart_rate(record: &UserRecord) -> ChartPanel {
        let points = vec![
            DataPoint::labelled("Resting", f64::from(record.resting_heart_rate)),
            DataPoint::labelled("Average", f64::from(record.avg_heart_rate)),
            DataPoint::labelled("Max", f64::from(record.max_heart_rate)),
        ];
        ChartPanel {
            id: "heart_rate".into(),
            title: "Heart Rate Analysis".into(),
            content: PanelContent::Bar {
                series: vec![Series::new("Heart Rate", points)],
            },
        }
    }

    fn sleep(record: &UserRecord) -> ChartPanel {
        let points = vec![
            DataPoint::labelled("Sleep Hours", record.sleep_hours_total / DAYS_PER_WEEK),
            DataPoint::labelled("Target Hours", SLEEP_TARGET_HOURS),
        ];
        ChartPanel {
            id: "sleep".into(),
            title: "Sleep & Recovery".into(),
            content: PanelContent::Bar {
                series: vec![Series::new("Sleep", points)],
            },
        }
    }

    fn fitness_progress(&self, record: &UserRecord) -> AppResult<ChartPanel> {
        let points = self
            .progress
            .health_score_trend(record, TREND_WEEKS)?
            .into_iter()
            .map(|point| DataPoint::numeric(f64::from(point.week), point.health_score))
            .collect();
        Ok(ChartPanel {
            id: "fitness_progress".into(),
            title: "Fitness Progress".into(),
            content: PanelContent::Line {
                series: vec![Series::new("Health Score Trend", points)],
            },
        })
    }
}

impl ChartComposer for DashboardChartBuilder {
    fn compose(
        &self,
        profile: &UserProfile,
        record: &UserRecord,
        peers: &[&UserRecord],
    ) -> AppResult<ChartPayload> {
        Ok(ChartPayload {
            title: format!("Personal Fitness Dashboard - {}", profile.basic_info.name),
            panels: vec![
                Self::activity_overview(record),
                Self::health_score(record),
                Self::activity_vs_peers(record, peers),
                Self::heart_rate(record),
                Self::sleep(record),
                self.fitness_progress(record)?,
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master_table::test_support::table;

    #[test]
    fn test_dashboard_has_six_panels() {
        let table = table(&[
            ("USR001", 30, "Beginner", 70_000),
            ("USR002", 50, "Beginner", 40_000),
            ("USR003", 30, "Advanced", 90_000),
        ]);
        let record = table.get("USR001").unwrap();
        let peers: Vec<_> = table.with_fitness_level(record.fitness_level).collect();
        let profile = UserProfile::from(record);

        let payload = DashboardChartBuilder::default()
            .compose(&profile, record, &peers)
            .unwrap();

        let ids: Vec<_> = payload.panels.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "weekly_activity",
                "health_score",
                "activity_vs_peers",
                "heart_rate",
                "sleep",
                "fitness_progress",
            ]
        );
        assert_eq!(payload.title, "Personal Fitness Dashboard - Alex RunnerUSR001");

        match &payload.panels[2].content {
            PanelContent::Scatter { series } => {
                assert_eq!(series[0].points.len(), 2);
                assert_eq!(series[1].points.len(), 1);
            }
            other => panic!("unexpected panel content: {other:?}"),
        }
    }

    #[test]
    fn test_payload_json_shape() {
        let table = table(&[("USR001", 30, "Beginner", 70_000)]);
        let record = table.get("USR001").unwrap();
        let payload = DashboardChartBuilder::default()
            .compose(&UserProfile::from(record), record, &[record])
            .unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        let overview = &json["panels"][0];
        assert_eq!(overview["kind"], "bar");
        assert_eq!(overview["series"][0]["points"][0]["x"], "Steps");
        assert_eq!(overview["series"][0]["points"][0]["y"], 70.0);
        assert_eq!(json["panels"][1]["kind"], "indicator");
        assert_eq!(json["panels"][1]["max"], 100.0);
        let trend = json["panels"][5]["series"][0]["points"].as_array().unwrap();
        assert_eq!(trend.len(), 12);
    }
}
