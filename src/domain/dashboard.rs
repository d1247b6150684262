// Dashboard domain model - the home page overview
use super::equipment::StatusCount;
use super::production::DailyRecord;

#[derive(Debug, Clone)]
pub struct Overview {
    pub total_production: f64,
    pub running_equipment: usize,
    pub maintenance_equipment: usize,
    pub upcoming_maintenance: usize,
    pub daily: Vec<DailyRecord>,
    pub status_counts: Vec<StatusCount>,
}
