use crate::data::{
    filter_restaurants, CategoryCounts, Dataset, FilterError, FilterSelection, FilteredView,
    TopCategory,
};

/// Everything one render pass needs, derived in full from the immutable
/// dataset and the current selection on every keypress. Nothing is cached
/// between passes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPlan {
    pub counts: CategoryCounts,
    pub top: Vec<TopCategory>,
    pub filtered: Result<FilteredView, FilterError>,
    pub map: Option<MapPlan>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub row: usize,
    pub latitude: f64,
    pub longitude: f64,
}

/// Point set for the scatter map plus its mean-coordinate center. Only
/// built when there is at least one located record to plot, so the center
/// is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPlan {
    pub points: Vec<MapPoint>,
    pub center_latitude: f64,
    pub center_longitude: f64,
}

pub fn build_plan(data: &Dataset, selection: &FilterSelection) -> DashboardPlan {
    let counts = CategoryCounts::count_by_state(data, &selection.states);
    let top = counts.top_categories();
    let filtered = filter_restaurants(data, selection);
    let map = build_map_plan(data, &selection.states);

    DashboardPlan {
        counts,
        top,
        filtered,
        map,
    }
}

/// The map covers the state-filtered records with coordinates; the
/// city/category filter does not narrow it. No selected states or no
/// located records means no plan, and the view shows its placeholder
/// instead of computing an undefined center.
fn build_map_plan(data: &Dataset, states: &[String]) -> Option<MapPlan> {
    if states.is_empty() {
        return None;
    }

    let mut points = Vec::new();
    for (row, (restaurant, _)) in data.iter().enumerate() {
        if !states.iter().any(|state| state == &restaurant.province) {
            continue;
        }
        if let Some((latitude, longitude)) = restaurant.location() {
            points.push(MapPoint {
                row,
                latitude,
                longitude,
            });
        }
    }

    if points.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let total = points.len() as f64;
    let center_latitude = points.iter().map(|point| point.latitude).sum::<f64>() / total;
    let center_longitude = points.iter().map(|point| point.longitude).sum::<f64>() / total;

    Some(MapPlan {
        points,
        center_latitude,
        center_longitude,
    })
}
