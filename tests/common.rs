#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rbikeshare::config::Datasets;
use rbikeshare::data::DataLoader;
use rbikeshare::ui::prompt::Console;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const CANAL: &str = "Canal St & Adams St";
pub const CLINTON: &str = "Clinton St & Madison St";
pub const STREETER: &str = "Streeter Dr & Grand Ave";

/// Seven trips with gender and birth year, leading unnamed index column
/// as in the published datasets.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-01-01 08:15:00,2017-01-01 08:30:00,900,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1980.0
955915,2017-01-02 09:00:00,2017-01-02 09:10:00,600,Canal St & Adams St,Streeter Dr & Grand Ave,Subscriber,Female,1990.0
9031,2017-02-06 08:45:00,2017-02-06 08:50:00,300,Clinton St & Madison St,Canal St & Adams St,Customer,,
304487,2017-03-06 17:20:00,2017-03-06 17:40:00,1200,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1985.0
45207,2017-03-07 08:05:00,2017-03-07 08:12:30,450,Streeter Dr & Grand Ave,Clinton St & Madison St,Customer,Female,1990.0
1473887,2017-06-05 18:30:00,2017-06-05 18:42:30,750,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1990.0
961916,2017-06-10 08:10:00,2017-06-10 08:35:00,1500,Clinton St & Madison St,Streeter Dr & Grand Ave,Subscriber,Male,1975.0
";

/// Three identical Sunday-morning trips, no gender / birth year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-01-01 08:15:00,2017-01-01 08:39:00,1423.854,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-01-01 08:15:00,2017-01-01 08:25:00,600.5,Lincoln Memorial,Jefferson Memorial,Customer
1330037,2017-01-01 08:15:00,2017-01-01 08:20:00,300,14th & Belmont St NW,15th & K St NW,Subscriber
";

/// `n` January trips on consecutive days starting Sunday 2017-01-01.
pub fn generated_csv(n: usize) -> String {
    let mut out = String::from(
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 0..n {
        let day = i % 31 + 1;
        out.push_str(&format!(
            "2017-01-{day:02} 07:00:00,2017-01-{day:02} 07:10:00,{},W 21 St & 6 Ave,E 17 St & Broadway,Subscriber,Female,1988\n",
            600 + i
        ));
    }
    out
}

/// A fresh data directory with the three city files.
/// New York City gets `nyc_rows` generated trips.
pub fn fixture_dir(name: &str, nyc_rows: usize) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("rbikeshare_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create fixture dir");

    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington");
    fs::write(dir.join("new_york_city.csv"), generated_csv(nyc_rows)).expect("write nyc");
    dir
}

pub fn loader(dir: &Path) -> DataLoader {
    DataLoader::new(dir, Datasets::default())
}

/// Console reading `input`, writing into a buffer.
pub fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (_, out) = console.into_inner();
    String::from_utf8(out).expect("utf-8 output")
}

/// The binary, isolated from any real config file via HOME.
pub fn rbs(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rbikeshare");
    cmd.env("HOME", dir)
        .env("APPDATA", dir)
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

/// Temporary output file path, removed if present.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rbikeshare_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
