use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Position of a 0-indexed page within a collection of `total` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub size: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.size.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// "11-20 of 42"; "0-0 of 0" for an empty collection.
    pub fn label(&self) -> String {
        let size = self.size.max(1);
        let first = (self.page * size + 1).min(self.total);
        let last = ((self.page + 1) * size).min(self.total);
        format!("{first}-{last} of {}", self.total)
    }
}

#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let sizes = page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZES.to_vec());
    let window = Memo::new(move |_| PageWindow {
        page: current_page.get(),
        size: page_size.get(),
        total: total_count.get(),
    });
    let no_previous = Signal::derive(move || !window.get().has_previous());
    let no_next = Signal::derive(move || !window.get().has_next());

    let step = move |target: fn(&PageWindow) -> usize| {
        move |_| on_page_change.run(target(&window.get_untracked()))
    };

    view! {
        <div class="pagination-controls">
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle
                disabled=no_previous attr:title="First page" on_click=step(|_| 0)>
                {icon("chevrons-left")}
            </Button>
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle
                disabled=no_previous attr:title="Previous page" on_click=step(|w| w.page.saturating_sub(1))>
                {icon("chevron-left")}
            </Button>
            <span class="pagination-info">{move || window.get().label()}</span>
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle
                disabled=no_next attr:title="Next page" on_click=step(|w| w.page + 1)>
                {icon("chevron-right")}
            </Button>
            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle
                disabled=no_next attr:title="Last page" on_click=step(PageWindow::last_page)>
                {icon("chevrons-right")}
            </Button>
            <select
                class="page-size-select"
                title="Rows per page"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {sizes.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let w = PageWindow { page: 1, size: 10, total: 42 };
        assert_eq!(w.label(), "11-20 of 42");
        let w = PageWindow { page: 4, size: 10, total: 42 };
        assert_eq!(w.label(), "41-42 of 42");
        let w = PageWindow { page: 0, size: 10, total: 0 };
        assert_eq!(w.label(), "0-0 of 0");
    }

    #[test]
    fn test_navigation_bounds() {
        let w = PageWindow { page: 0, size: 25, total: 50 };
        assert!(!w.has_previous());
        assert!(w.has_next());
        assert_eq!(w.last_page(), 1);

        let w = PageWindow { page: 1, size: 25, total: 50 };
        assert!(!w.has_next());

        let empty = PageWindow { page: 0, size: 25, total: 0 };
        assert!(!empty.has_next());
        assert_eq!(empty.last_page(), 0);
    }
}
