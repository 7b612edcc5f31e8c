use super::ZoneAssignment;
use crate::{Error, Result};
use std::collections::HashSet;

#[derive(Debug, PartialEq)]
pub struct Partition {
    pub zone_layer_ids: Vec<String>,
    pub non_zone_layer_ids: Vec<String>,
}

/// Splits the requested layers into zone layers, in assignment order, and
/// the remaining non-zone layers, in request order.
pub fn partition(layer_ids: &[String], zone_assignments: &[ZoneAssignment]) -> Result<Partition> {
    let mut zone_layer_ids: Vec<String> = vec![];
    for assignment in zone_assignments {
        if !layer_ids.contains(&assignment.layer_id) {
            return Err(Error::InvalidInput(format!(
                "Zone layer {} is not among the requested layers",
                assignment.layer_id
            )));
        }
        if zone_layer_ids.contains(&assignment.layer_id) {
            return Err(Error::InvalidInput(format!(
                "Zone layer {} is assigned more than once",
                assignment.layer_id
            )));
        }
        zone_layer_ids.push(assignment.layer_id.clone());
    }
    let zone_set: HashSet<&String> = zone_layer_ids.iter().collect();
    let non_zone_layer_ids = layer_ids
        .iter()
        .filter(|it| !zone_set.contains(it))
        .cloned()
        .collect();
    Ok(Partition {
        zone_layer_ids,
        non_zone_layer_ids,
    })
}
