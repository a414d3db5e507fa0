use cineshelf_model::{
    FilterCriteria, Genre, query,
    query::param,
};

fn pairs(query_string: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query_string.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn unset_genre_never_reaches_the_query_string() {
    let criteria = FilterCriteria {
        title: "Alien".to_owned(),
        genre_id: 0,
        page: 5,
        ..FilterCriteria::default()
    };

    let encoded = query::encode(&criteria);
    assert!(
        pairs(&encoded).iter().all(|(k, _)| k != param::GENRE_ID),
        "genreId must be omitted when unset, got {encoded:?}"
    );
}

#[test]
fn page_is_always_present_and_at_least_one() {
    for criteria in [
        FilterCriteria::default(),
        FilterCriteria {
            title: "Heat".to_owned(),
            genre_id: 3,
            upcoming_releases: true,
            in_theaters: true,
            page: 12,
            ..FilterCriteria::default()
        },
    ] {
        let encoded = query::encode(&criteria);
        let page = pairs(&encoded)
            .into_iter()
            .find(|(k, _)| k == param::PAGE)
            .map(|(_, v)| v.parse::<u32>().unwrap())
            .expect("page must always be emitted");
        assert!(page >= 1);
    }
}

#[test]
fn bookmarked_location_reproduces_the_filter() {
    let criteria = query::parse("?title=Matrix&genreId=2&page=3");

    assert_eq!(
        criteria,
        FilterCriteria {
            title: "Matrix".to_owned(),
            genre_id: 2,
            page: 3,
            ..FilterCriteria::default()
        }
    );

    // The outgoing request carries exactly the non-default fields (the
    // ascending default is true, hence emitted) plus the ever-present page.
    assert_eq!(
        query::encode(&criteria),
        "title=Matrix&sortByAsc=true&genreId=2&page=3"
    );
}

#[test]
fn malformed_values_fall_back_to_defaults() {
    let criteria =
        query::parse("title=Up&genreId=comedy&page=NaN&sortByAsc=maybe");

    assert_eq!(criteria.title, "Up");
    assert_eq!(criteria.genre_id, 0);
    assert_eq!(criteria.page, 1);
    assert!(criteria.sort_by_ascending);
}

#[test]
fn page_zero_is_rejected_on_parse() {
    assert_eq!(query::parse("page=0").page, 1);
}

#[test]
fn release_flags_round_trip() {
    let criteria = FilterCriteria {
        upcoming_releases: true,
        in_theaters: true,
        ..FilterCriteria::default()
    };

    let encoded = query::encode(&criteria);
    assert_eq!(
        encoded,
        "sortByAsc=true&upcomingReleases=true&inTheaters=true&page=1"
    );
    assert_eq!(query::parse(&encoded), criteria);
}

#[test]
fn canonical_strings_are_reencoded_stably() {
    for canonical in [
        "sortByAsc=true&page=1",
        "title=Matrix&sortByAsc=true&genreId=2&page=3",
        "sortByAsc=true&upcomingReleases=true&page=2",
    ] {
        assert_eq!(query::encode(&query::parse(canonical)), canonical);
    }
}

#[test]
fn unrecognized_parameters_are_ignored() {
    let criteria = query::parse("utm_source=newsletter&page=4&theme=dark");
    assert_eq!(
        criteria,
        FilterCriteria {
            page: 4,
            ..FilterCriteria::default()
        }
    );
}

#[test]
fn selector_options_start_with_the_sentinel() {
    // Mirrors how the player seeds its selector before the lookup lands.
    let fetched = vec![
        Genre { id: 1, name: "Action".to_owned() },
        Genre { id: 2, name: "Drama".to_owned() },
    ];
    let mut options = vec![Genre::sentinel()];
    options.extend(fetched);

    assert!(options[0].is_sentinel());
    assert_eq!(options.len(), 3);
}
