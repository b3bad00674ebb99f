mod common;

#[cfg(test)]
pub mod pagination_tests {
    use playvault::catalog::*;

    #[test]
    fn test_total_pages_matches_ceiling_formula() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(total_pages(47, PAGE_SIZE), 1);
        assert_eq!(total_pages(48, PAGE_SIZE), 1);
        assert_eq!(total_pages(49, PAGE_SIZE), 2);
        assert_eq!(total_pages(96, PAGE_SIZE), 2);
        assert_eq!(total_pages(97, PAGE_SIZE), 3);
    }

    #[test]
    fn test_page_never_leaves_valid_range() {
        for requested in [0u32, 1, 2, 3, 50, 1000] {
            let pager = Pager::new(requested, 88);
            assert!(pager.page >= 1);
            assert!(pager.page <= pager.total_pages);
        }
    }

    #[test]
    fn test_category_page_two_of_88_items() {
        // category=pc, page=2, limit=48, total=88: two pages, Next
        // disabled and Previous enabled.
        let pager = Pager::new(2, 88);
        assert_eq!(pager.total_pages, 2);
        assert_eq!(pager.page, 2);
        assert!(pager.has_prev());
        assert!(!pager.has_next());
    }

    #[test]
    fn test_requested_page_falls_back_to_one() {
        assert_eq!(requested_page(None), 1);
        assert_eq!(requested_page(Some("")), 1);
        assert_eq!(requested_page(Some("zero")), 1);
        assert_eq!(requested_page(Some("0")), 1);
        assert_eq!(requested_page(Some("7")), 7);
    }

    #[test]
    fn test_out_of_range_page_is_refetched_at_the_clamp() {
        // ?page=99 over 88 items: the pager label says "Page 2 of 2",
        // so the content fetch must be re-run at page 2 or the grid
        // and the label would disagree.
        let requested = requested_page(Some("99"));
        assert_eq!(requested, 99);
        let pager = Pager::new(requested, 88);
        assert_eq!(pager.page, 2);
        assert_eq!(pager.corrected_page(requested), Some(2));
    }

    #[test]
    fn test_in_range_page_stays_a_single_fetch() {
        assert_eq!(Pager::new(2, 88).corrected_page(2), None);
        assert_eq!(Pager::new(1, 0).corrected_page(1), None);
    }

    #[test]
    fn test_window_span_is_seven_and_in_range() {
        let pager = Pager::new(50, 48 * 100);
        let numbers = pager.numbers();
        assert_eq!(numbers.len(), PAGE_WINDOW as usize);
        assert!(numbers.contains(&pager.page));
        assert!(numbers.iter().all(|n| *n >= 1 && *n <= pager.total_pages));
        // Consecutive run.
        for pair in numbers.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
    }
}

#[cfg(test)]
pub mod search_query_tests {
    use playvault::catalog::search_query;

    #[test]
    fn test_whitespace_query_never_reaches_the_backend() {
        // The search handlers only call the client when this returns
        // Some, so None here means zero backend traffic.
        assert_eq!(search_query(None), None);
        assert_eq!(search_query(Some("")), None);
        assert_eq!(search_query(Some("   ")), None);
        assert_eq!(search_query(Some("\t\n")), None);
    }

    #[test]
    fn test_real_query_is_trimmed_before_the_request() {
        assert_eq!(search_query(Some(" doom ")), Some("doom".to_string()));
        assert_eq!(
            search_query(Some("half life")),
            Some("half life".to_string())
        );
    }
}

#[cfg(test)]
pub mod access_tests {
    use super::common::*;

    use playvault::catalog::can_download;

    #[test]
    fn test_free_item_is_open_without_session() {
        assert!(can_download(&get_seed_item_free(), None));
    }

    #[test]
    fn test_paid_item_locked_without_session() {
        assert!(!can_download(&get_seed_item_paid(), None));
    }

    #[test]
    fn test_paid_item_locked_without_purchase() {
        let session = get_seed_session_fresh();
        assert!(!can_download(&get_seed_item_paid(), Some(&session)));
    }

    #[test]
    fn test_purchase_unlocks_paid_item() {
        let session = get_seed_session_user();
        assert!(can_download(&get_seed_item_paid(), Some(&session)));
    }

    #[test]
    fn test_admin_unlocks_everything_regardless_of_purchases() {
        let session = get_seed_session_admin();
        assert!(session.purchased.is_empty());
        assert!(can_download(&get_seed_item_paid(), Some(&session)));
        assert!(can_download(&get_seed_item_free(), Some(&session)));
    }
}

#[cfg(test)]
pub mod listing_tests {
    use super::common::*;

    use playvault::api::CatalogView;
    use playvault::catalog::slugify;
    use playvault::common::ApiError;
    use playvault::models::CatalogPage;

    #[test]
    fn test_detail_path_uses_slugs() {
        let item = get_seed_item_free();
        assert_eq!(
            item.detail_path(),
            "/download/mac-os/stardew-valley/650000000000000000000000"
        );
    }

    #[test]
    fn test_slugify_strips_punctuation_and_collapses_spaces() {
        assert_eq!(slugify("The Witcher 3: Wild Hunt"), "the-witcher-3-wild-hunt");
        assert_eq!(slugify("  Half   Life  "), "half-life");
    }

    #[test]
    fn test_response_aliases_decode_into_items() {
        for body in [
            r#"{"apps": [], "total": 5}"#,
            r#"{"data": [], "total": 5}"#,
            r#"{"games": [], "total": 5}"#,
        ] {
            let page: CatalogPage = serde_json::from_str(body).unwrap();
            assert_eq!(page.total, 5, "failed on body {body}");
        }
    }

    #[test]
    fn test_server_error_becomes_empty_view_with_message() {
        let view = CatalogView::from_result(Err(ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        }));
        assert!(view.items.is_empty());
        assert_eq!(view.total, 0);
        assert_eq!(view.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_successful_page_keeps_items_and_total() {
        let page = CatalogPage {
            items: vec![get_seed_item_free(), get_seed_item_paid()],
            total: 88,
        };
        let view = CatalogView::from_result(Ok(page));
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total, 88);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_release_date_prefers_updated_at() {
        let item = get_seed_item_free();
        assert_eq!(item.release_date(), "04.01.26");

        let item = get_seed_item_paid();
        assert_eq!(item.release_date(), "05.01.26");
    }
}
