// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Service implementations for the supervisor loop.

pub mod indicator;
pub mod link_watch;
pub mod net_poll;
pub mod radio;

pub use indicator::IndicatorService;
pub use link_watch::LinkWatchService;
pub use net_poll::NetPollService;
pub use radio::RadioPollService;
