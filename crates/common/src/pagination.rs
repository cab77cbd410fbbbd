//! Page arithmetic.
//!
//! Every list in the admin panel is 1-indexed and must keep the displayed
//! page inside `[1, max(1, ceil(total / size))]`.

/// Default page number (1-indexed)
pub const DEFAULT_PAGE: u32 = 1;

/// Default items per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum items per page
pub const MAX_PAGE_SIZE: u32 = 100;

/// Number of pages needed for `total` records, `ceil(total / size)`.
///
/// Zero records yields zero pages. A zero page size is treated as the default.
pub fn max_pages(total: u64, size: u32) -> u32 {
    let size = if size == 0 { DEFAULT_PAGE_SIZE } else { size } as u64;
    let pages = total.div_ceil(size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp `requested` into `[1, max(1, max_pages(total, size))]`.
pub fn clamp_page(requested: u32, total: u64, size: u32) -> u32 {
    let upper = max_pages(total, size).max(1);
    requested.clamp(1, upper)
}

/// Page to reload after a row was edited: `min(current, max_pages)`,
/// falling back to page 1 when that is zero.
pub fn refetch_page_after_edit(current: u32, total: u64, size: u32) -> u32 {
    let target = current.min(max_pages(total, size));
    if target == 0 {
        DEFAULT_PAGE
    } else {
        target
    }
}
