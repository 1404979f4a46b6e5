//! Generic paged, filterable table over a repository collection.

use super::columns::Column;
use super::filter_set::{Comparator, Filter};
use super::query::{ListQuery, ListTab};
use super::remote_list::RemoteListModel;
use crate::shared::components::{FilterPanel, FilterTag, PaginationControls, DEFAULT_PAGE_SIZES};
use crate::shared::icons::icon;
use crate::shared::row_actions::RowAction;
use contracts::shared::Row;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LiveTable(
    /// Collection endpoint, may already carry a query string.
    #[prop(into)]
    endpoint: String,
    columns: Vec<Column>,
    #[prop(optional)]
    actions: Vec<RowAction>,
    /// Named partitions; the first one is selected initially.
    #[prop(optional)]
    tabs: Vec<ListTab>,
    #[prop(optional)]
    default_limit: Option<usize>,
    #[prop(optional)]
    page_sizes: Option<Vec<usize>>,
    /// (field, label) pairs offered by the filter editor. No editor when empty.
    #[prop(optional)]
    filter_fields: Vec<(&'static str, &'static str)>,
    /// Re-fetches whenever this trigger is notified.
    #[prop(optional)]
    refresh: Option<Trigger>,
) -> impl IntoView {
    let mut initial = ListQuery::new(endpoint, default_limit.unwrap_or(10));
    if let Some(first) = tabs.first() {
        initial.select_tab(first);
    }
    let query = RwSignal::new(initial);
    let model = RemoteListModel::new();
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let tabs = StoredValue::new(tabs);
    let has_actions = !actions.with_value(|a| a.is_empty());
    let has_filters = !filter_fields.is_empty();
    let filter_fields = StoredValue::new(filter_fields);

    Effect::new(move |_| {
        if let Some(trigger) = refresh {
            trigger.track();
        }
        let q = query.get();
        model.fetch(q.url(), q.offset, q.limit);
    });

    let refresh_now = Callback::new(move |_| {
        let q = query.get_untracked();
        model.fetch(q.url(), q.offset, q.limit);
    });

    let selected_tab = RwSignal::new(
        tabs.with_value(|t| t.first().map(|tab| tab.label.to_string()))
            .unwrap_or_default(),
    );
    Effect::new(move |prev: Option<String>| {
        let label = selected_tab.get();
        if prev.as_ref().is_some_and(|p| *p != label) {
            if let Some(tab) = tabs.with_value(|t| t.iter().find(|tab| tab.label == label).cloned()) {
                leptos::logging::log!("List tab: {}", label);
                query.update(|q| q.select_tab(&tab));
            }
        }
        label
    });

    let current_page = Signal::derive(move || model.state.with(|s| s.page.current_page()));
    let total_count = Signal::derive(move || model.state.with(|s| s.page.total));
    let page_size = Signal::derive(move || query.with(|q| q.limit));
    let active_filters = Signal::derive(move || query.with(|q| q.filters.active_count()));

    let pagination = move || {
        view! {
            <PaginationControls
                current_page=current_page
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |page| query.update(|q| q.go_to_page(page)))
                on_page_size_change=Callback::new(move |size| query.update(|q| q.set_limit(size)))
                page_size_options=page_sizes.clone().unwrap_or_else(|| DEFAULT_PAGE_SIZES.to_vec())
            />
        }
    };

    let filter_expanded = RwSignal::new(false);
    let new_field = RwSignal::new(
        filter_fields.with_value(|f| f.first().map(|(k, _)| k.to_string())).unwrap_or_default(),
    );
    let new_comparator = RwSignal::new(Comparator::Equals.as_str().to_string());
    let new_value = RwSignal::new(String::new());

    let add_filter = move |_| {
        let field = new_field.get_untracked();
        let Some(comparator) = Comparator::from_str(&new_comparator.get_untracked()) else {
            return;
        };
        let value = new_value.get_untracked();
        if field.is_empty() || (comparator.takes_value() && value.trim().is_empty()) {
            return;
        }
        query.update(|q| {
            q.filters.add(Filter::new(field, comparator, value.trim()));
            q.offset = 0;
        });
        new_value.set(String::new());
    };

    let filter_editor = move || {
        view! {
            <Flex align=FlexAlign::End>
                <Select value=new_field>
                    {filter_fields.with_value(|fields| fields.iter().map(|(key, label)| view! {
                        <option value=*key>{*label}</option>
                    }).collect_view())}
                </Select>
                <Select value=new_comparator>
                    {Comparator::ALL.into_iter().map(|c| view! {
                        <option value=c.as_str()>{c.as_str()}</option>
                    }).collect_view()}
                </Select>
                <Input value=new_value placeholder="Value" />
                <Button appearance=ButtonAppearance::Primary on_click=add_filter>
                    {icon("plus")}
                    " Add filter"
                </Button>
            </Flex>
        }
    };

    let filter_tags = move || {
        let filters = query.with(|q| q.filters.filters().to_vec());
        filters
            .into_iter()
            .enumerate()
            .map(|(index, filter)| {
                view! {
                    <FilterTag
                        label=filter.to_string()
                        on_remove=Callback::new(move |_| query.update(|q| {
                            q.filters.remove(index);
                            q.offset = 0;
                        }))
                    />
                }
            })
            .collect_view()
    };

    let column_count = columns.with_value(|c| c.len()) + usize::from(has_actions);
    let column_labels: Vec<&'static str> = columns.with_value(|c| c.iter().map(|col| col.label).collect());
    let tab_labels: StoredValue<Vec<&'static str>> = StoredValue::new(tabs.with_value(|t| t.iter().map(|tab| tab.label).collect()));

    view! {
        <div class="live-table">
            <Show when=move || tabs.with_value(|t| !t.is_empty())>
                <TabList selected_value=selected_tab>
                    {tab_labels.get_value().into_iter().map(|label| view! {
                        <Tab value=label>{label}</Tab>
                    }).collect_view()}
                </TabList>
            </Show>

            {if has_filters {
                view! {
                    <FilterPanel
                        is_expanded=filter_expanded
                        active_filters_count=active_filters
                        pagination_controls=pagination
                        filter_content=filter_editor
                        filter_tags=filter_tags
                    />
                }.into_any()
            } else {
                pagination().into_any()
            }}

            {move || model.state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e.to_string()}</span>
                    <Button size=ButtonSize::Small on_click=move |_| refresh_now.run(())>
                        "Retry"
                    </Button>
                </div>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        {column_labels.into_iter().map(|label| view! {
                            <TableHeaderCell resizable=true min_width=120.0>{label}</TableHeaderCell>
                        }).collect_view()}
                        {has_actions.then(|| view! {
                            <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let (empty, loading) = model.state.with(|s| (s.page.rows.is_empty(), s.loading));
                        empty.then(|| {
                            let message = if loading { "Loading..." } else { "No results" };
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan=column_count.to_string()>
                                        <TableCellLayout>
                                            {loading.then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                                            {message}
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                    }}
                    // Keyed by path so a refetch keeps the rows (and their open dialogs) alive.
                    <For
                        each=move || model.rows()
                        key=row_key
                        let:row
                    >
                        {render_row(row, columns, actions, refresh_now)}
                    </For>
                </TableBody>
            </Table>
        </div>
    }
}

/// Rows are keyed by repository path; names are not unique across folders.
pub fn row_key(row: &Row) -> String {
    row.path.clone()
}

fn render_row(
    row: Row,
    columns: StoredValue<Vec<Column>>,
    actions: StoredValue<Vec<RowAction>>,
    on_done: Callback<()>,
) -> impl IntoView {
    let cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let text = col.cell_text(&row);
                let content = match col.cell_href(&row) {
                    Some(href) => view! { <a href=href class="live-table__link">{text}</a> }.into_any(),
                    None => view! { <span>{text}</span> }.into_any(),
                };
                view! {
                    <TableCell>
                        <TableCellLayout>{content}</TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view()
    });
    let action_cell = actions.with_value(|acts| {
        (!acts.is_empty()).then(|| {
            let rendered = acts.iter().map(|a| a.render(&row, on_done)).collect_view();
            view! {
                <TableCell>
                    <TableCellLayout>{rendered}</TableCellLayout>
                </TableCell>
            }
        })
    });
    view! {
        <TableRow>
            {cells}
            {action_cell}
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_is_path() {
        let a = Row::new("/Forms/1", "Intake");
        let b = Row::new("/Forms/2", "Intake");
        assert_eq!(row_key(&a), "/Forms/1");
        assert_ne!(row_key(&a), row_key(&b));
    }
}
