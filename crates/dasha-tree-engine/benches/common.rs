// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2

const RULERS: [&str; 9] = ["Ke", "Ve", "Su", "Mo", "Ma", "Ra", "Ju", "Sa", "Me"];

/// PyJHora style listing: `mahadashas` MDs, each with nine ADs of nine PDs.
#[allow(dead_code)]
pub fn generate_pyjhora_listing(mahadashas: usize) -> String {
    let mut content = String::from("Vimsottari Dasa:\nMaha Dasas:\n");
    for md in 0..mahadashas {
        let year = 1900 + md * 9;
        content.push_str(&format!(
            "  {}: {year}-01-01 00:00:00 - {}-01-01 00:00:00\n",
            RULERS[md % 9],
            year + 9
        ));
    }

    for md in 0..mahadashas {
        let year = 1900 + md * 9;
        content.push_str(&format!(
            "{} MD: {year}-01-01 00:00:00 - {}-01-01 00:00:00\n",
            RULERS[md % 9],
            year + 9
        ));
        content.push_str("Antardasas in this MD:\n");
        for ad in 0..9 {
            let ad_year = year + ad;
            content.push_str(&format!(
                "    {} AD: {ad_year}-01-01 00:00:00 - {}-01-01 00:00:00\n",
                RULERS[(md + ad) % 9],
                ad_year + 1
            ));
            content.push_str("    Pratyantardasas in this AD:\n");
            for pd in 0..9 {
                let month = pd + 1;
                content.push_str(&format!(
                    "        {} PD: {ad_year}-{month:02}-01 00:00:00 - {ad_year}-{:02}-01 00:00:00\n",
                    RULERS[(md + ad + pd) % 9],
                    month + 1
                ));
            }
        }
    }
    content
}

/// Free-form report with long level names, prose and page furniture.
#[allow(dead_code)]
pub fn generate_report(mahadashas: usize) -> String {
    let mut content = String::from("Dasha Periods\nName: Bench Person\n\n");
    for md in 0..mahadashas {
        let year = 1900 + md * 9;
        content.push_str(&format!(
            "Mahadasha of {}: 01 January {year} to 31 December {}\n",
            RULERS[md % 9],
            year + 8
        ));
        content.push_str("A long stretch with mixed results.\n");
        for ad in 0..9 {
            content.push_str(&format!(
                "  Antardasha of {}: 01 January {} to 31 December {}\n",
                RULERS[(md + ad) % 9],
                year + ad,
                year + ad
            ));
        }
        content.push_str(&format!("Page {}\n", md + 1));
    }
    content
}
