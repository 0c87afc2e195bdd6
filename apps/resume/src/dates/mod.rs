// Date ranges for experience and education entries.
// Implements: descending-recency ordering with the open-ended "present" sentinel,
// and the whole-month elapsed-time breakdown shown next to each range.

pub mod clock;
pub mod elapsed;
pub mod range;

pub use clock::{Clock, FixedClock, SystemClock};
pub use elapsed::{months_and_years_between, total_months_between, ElapsedDuration, ElapsedFormat};
pub use range::{compare, sort_by_range, DateRange, HasRange, RangeEnd};
