use indexmap::IndexMap;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{BTreeSet, HashMap};
use crate::constants::{DEFAULT_LINE_COLOR, DEFAULT_TEXT_COLOR, UNKNOWN_TERMINUS};
use crate::models::{base_line_id, CityText, Direction, LineInfo, Station, StationsData};

/// Labels for the two travel directions of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionLabels {
    pub forward: String,
    pub backward: String,
}

/// Read-only index over one city's station and line tables
///
/// All queries are total: unknown ids produce `None`, an empty list or a
/// fallback value, never a panic.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    stations: IndexMap<String, Station>,
    lines: IndexMap<String, Vec<String>>,
    line_info: Vec<LineInfo>,
    lines_by_station: HashMap<String, Vec<String>>,
    // Undirected adjacency; one edge per consecutive pair on a line, weighted by line id
    graph: UnGraph<String, String>,
    station_to_node: HashMap<String, NodeIndex>,
}

impl MetroNetwork {
    #[must_use]
    pub fn new(data: StationsData, line_info: Vec<LineInfo>) -> Self {
        let stations: IndexMap<String, Station> = data
            .stations
            .into_iter()
            .map(|(id, raw)| (id.clone(), Station::from_raw(id, raw)))
            .collect();

        let mut lines_by_station: HashMap<String, Vec<String>> = HashMap::new();
        for (line_id, station_ids) in &data.lines {
            for station_id in station_ids {
                let entry = lines_by_station.entry(station_id.clone()).or_default();
                if !entry.contains(line_id) {
                    entry.push(line_id.clone());
                }
            }
        }

        let mut graph = UnGraph::new_undirected();
        let mut station_to_node = HashMap::new();
        for id in stations.keys() {
            station_to_node.insert(id.clone(), graph.add_node(id.clone()));
        }
        for (line_id, station_ids) in &data.lines {
            for pair in station_ids.windows(2) {
                let (Some(&from), Some(&to)) = (station_to_node.get(&pair[0]), station_to_node.get(&pair[1])) else {
                    continue;
                };
                graph.add_edge(from, to, line_id.clone());
            }
        }

        log!(
            "Indexed {} stations, {} lines, {} track links",
            stations.len(),
            data.lines.len(),
            graph.edge_count()
        );

        Self {
            stations,
            lines: data.lines,
            line_info,
            lines_by_station,
            graph,
            station_to_node,
        }
    }

    #[must_use]
    pub fn station(&self, station_id: &str) -> Option<&Station> {
        self.stations.get(station_id)
    }

    /// All stations in table order
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    #[must_use]
    pub fn stations_sorted_by_name(&self) -> Vec<&Station> {
        let mut stations: Vec<&Station> = self.stations.values().collect();
        stations.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        stations
    }

    #[must_use]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Ids of every routable line (including branches) in table order
    pub fn line_ids(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    /// Display record of a line; branches resolve to their base line
    #[must_use]
    pub fn line_data(&self, line_id: &str) -> Option<&LineInfo> {
        let base = base_line_id(line_id);
        self.line_info.iter().find(|line| line.id == base)
    }

    #[must_use]
    pub fn line_color(&self, line_id: &str) -> &str {
        self.line_data(line_id).map_or(DEFAULT_LINE_COLOR, |line| line.color.as_str())
    }

    #[must_use]
    pub fn line_text_color(&self, line_id: &str) -> &str {
        self.line_data(line_id).map_or(DEFAULT_TEXT_COLOR, |line| line.text_color.as_str())
    }

    #[must_use]
    pub fn line_name<'a>(&'a self, line_id: &'a str) -> &'a str {
        self.line_data(line_id).map_or(line_id, |line| line.name.as_str())
    }

    /// Ordered station ids of a line; empty for unknown lines
    #[must_use]
    pub fn line_station_ids(&self, line_id: &str) -> &[String] {
        self.lines.get(line_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Ordered stations of a line, skipping ids without a station record
    #[must_use]
    pub fn line_stations(&self, line_id: &str) -> Vec<&Station> {
        self.line_station_ids(line_id)
            .iter()
            .filter_map(|id| self.stations.get(id))
            .collect()
    }

    /// Lines whose sequence contains the station, in table order
    #[must_use]
    pub fn lines_for_station(&self, station_id: &str) -> &[String] {
        self.lines_by_station.get(station_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Lines through the station other than `current_line`
    #[must_use]
    pub fn alternate_lines(&self, station_id: &str, current_line: Option<&str>) -> Vec<&str> {
        self.lines_for_station(station_id)
            .iter()
            .map(String::as_str)
            .filter(|line| Some(*line) != current_line)
            .collect()
    }

    /// Whether a line change is possible here; selects the roulette wheel
    #[must_use]
    pub fn has_correspondence(&self, station_id: &str, current_line: Option<&str>) -> bool {
        !self.alternate_lines(station_id, current_line).is_empty()
    }

    /// Station one step along `line_id` in `direction`
    ///
    /// `None` when the station is a terminus for that direction, or when the
    /// station, the line or the neighbor record is unknown.
    #[must_use]
    pub fn next_station(&self, station_id: &str, line_id: &str, direction: Direction) -> Option<&Station> {
        let ids = self.lines.get(line_id)?;
        let index = ids.iter().position(|id| id == station_id)?;
        let next = index.checked_add_signed(direction.step())?;
        self.stations.get(ids.get(next)?)
    }

    #[must_use]
    pub fn direction_labels(&self, line_id: Option<&str>, text: &CityText) -> DirectionLabels {
        let ids = line_id.map(|line| self.line_station_ids(line)).unwrap_or_default();
        let (Some(first), Some(last)) = (ids.first(), ids.last()) else {
            return DirectionLabels {
                forward: text.forward.to_string(),
                backward: text.backward.to_string(),
            };
        };

        let first_name = self.stations.get(first).map_or(UNKNOWN_TERMINUS, |s| s.name.as_str());
        let last_name = self.stations.get(last).map_or(UNKNOWN_TERMINUS, |s| s.name.as_str());
        DirectionLabels {
            forward: format!("→ {last_name}"),
            backward: format!("← {first_name}"),
        }
    }

    /// Stations directly linked to `station_id` on any line, sorted by id
    #[must_use]
    pub fn neighbors(&self, station_id: &str) -> Vec<&Station> {
        let Some(&node) = self.station_to_node.get(station_id) else {
            return Vec::new();
        };
        let ids: BTreeSet<&str> = self
            .graph
            .neighbors(node)
            .filter_map(|n| self.graph.node_weight(n))
            .map(String::as_str)
            .collect();
        ids.into_iter().filter_map(|id| self.stations.get(id)).collect()
    }
}
