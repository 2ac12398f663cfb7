use super::*;
use crate::server::{
    data::rescue_team::RescueTeamRepository,
    model::{
        pagination::{PageRequest, MAX_PAGE},
        rescue_request::{RescueRequestFilter, UpdateRescueRequestParams},
    },
    service::{rescue_request::RescueRequestService, rescue_team::RescueTeamService},
};

mod assign_team;
mod delete;
mod lifecycle;
mod update;
