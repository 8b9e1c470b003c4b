//! Known-answer queries over the artifact corpus

use crate::fixture::{artifacts, build_index, expect_results, INDEX};
use lexitrie::AutoCompleteIndex;

#[test]
fn two_char_search_hit() {
    expect_results(
        "sq",
        &[
            "com.microsoft.sqlserver:mssql-jdbc:9.2.1.jre8",
            "com.microsoft.sqlserver:mssql-jdbc:9.4.1.jre8",
            "com.squareup.okhttp3:okhttp:4.9.3",
            "com.squareup.okhttp3:logging-interceptor:4.9.3",
            "com.squareup.retrofit2:retrofit:2.9.0",
            "com.squareup.retrofit2:converter-jackson:2.9.0",
            "com.squareup.moshi:moshi:1.12.0",
            "com.squareup.leakcanary:leakcanary-android:2.10",
            "com.squareup.okio:okio:2.10.0",
        ],
    );
}

#[test]
fn two_char_search_miss() {
    expect_results("zz", &[]);
}

#[test]
fn three_char_search_hit() {
    expect_results(
        "hib",
        &[
            "org.hibernate:hibernate-core:6.1.3.Final",
            "com.vladmihalcea:hibernate-types-52:2.19.2",
            "org.hibernate:hibernate-envers:6.1.3.Final",
            "org.hibernate:hibernate-entitymanager:6.1.3.Final",
            "org.hibernate:hibernate-validator:7.0.4.Final",
            "org.hibernate:hibernate-spatial:6.1.3.Final",
            "org.hibernate:hibernate-c3p0:6.1.3.Final",
            "org.hibernate:hibernate-ehcache:6.1.3.Final",
            "org.hibernate:hibernate-proxool:6.1.3.Final",
        ],
    );
}

#[test]
fn three_char_search_miss() {
    expect_results("qrl", &[]);
}

#[test]
fn four_char_search_hit() {
    expect_results("enve", &["org.hibernate:hibernate-envers:6.1.3.Final"]);
}

#[test]
fn four_char_search_miss() {
    expect_results("envt", &[]);
}

#[test]
fn five_char_search_hit() {
    // One character past the indexed depth: the leaf bucket is
    // re-validated by substring match
    expect_results("enver", &["org.hibernate:hibernate-envers:6.1.3.Final"]);
}

#[test]
fn five_char_search_miss() {
    // Same leaf as "enver", but no corpus entry contains this substring
    expect_results("envek", &[]);
}

#[test]
fn multi_word_search_narrows() {
    expect_results(
        "hibernate core",
        &["org.hibernate:hibernate-core:6.1.3.Final"],
    );
    expect_results(
        "squareup retrofit",
        &[
            "com.squareup.retrofit2:retrofit:2.9.0",
            "com.squareup.retrofit2:converter-jackson:2.9.0",
        ],
    );
}

#[test]
fn query_without_alphabet_characters_matches_nothing() {
    expect_results("3.0.0", &[]);
}

#[test]
fn duplicate_loads_do_not_change_results() {
    let mut index = build_index(3);
    for artifact in artifacts() {
        index.add(artifact.to_string()).expect("corpus is in range");
    }

    let reloaded = index.search("hib").expect("query is in range");
    let original = INDEX.search("hib").expect("query is in range");
    assert_eq!(original, reloaded);
}
