//! Static weekly timetable and the per-slot trainee rosters drawn from it.

mod rosters;
mod table;

pub use rosters::{day_rosters, weekly_rosters, SlotRoster, EMPTY_ROSTER_MESSAGE};
pub use table::{day_name, parse_day, ScheduleSlot, ScheduleTable};
