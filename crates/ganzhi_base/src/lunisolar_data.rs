//! Chinese lunisolar calendar reference data, 1900–2100.
//!
//! One entry per lunar year. Month boundaries are the new-moon dates on the
//! 120 deg E meridian; leap months follow the no-principal-term rule.

/// First lunar year in the table.
pub const LUNAR_FIRST_YEAR: i32 = 1900;
/// Last lunar year in the table.
pub const LUNAR_LAST_YEAR: i32 = 2100;

const TABLE_YEARS: usize = (LUNAR_LAST_YEAR - LUNAR_FIRST_YEAR + 1) as usize;

/// Packed description of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LunarYearData {
    /// Gregorian month of the lunar new year (1 or 2).
    pub new_year_month: u8,
    /// Gregorian day of the lunar new year.
    pub new_year_day: u8,
    /// Month followed by a leap month, 0 when the year has none.
    pub leap_month: u8,
    /// Bit i set when the i-th month of the year (leap month counted in
    /// place) has 30 days; clear for 29.
    pub long_months: u16,
}

impl LunarYearData {
    const fn new(new_year_month: u8, new_year_day: u8, leap_month: u8, long_months: u16) -> Self {
        Self {
            new_year_month,
            new_year_day,
            leap_month,
            long_months,
        }
    }

    /// Number of months in the year (12 or 13).
    pub const fn month_count(&self) -> u8 {
        if self.leap_month == 0 { 12 } else { 13 }
    }

    /// Length of the month at sequence position `slot` (0-based, leap
    /// month counted in place).
    pub const fn slot_days(&self, slot: u8) -> u8 {
        if self.long_months & (1 << slot) != 0 { 30 } else { 29 }
    }
}

#[rustfmt::skip]
pub(crate) const LUNAR_YEARS: [LunarYearData; TABLE_YEARS] = [
    LunarYearData::new(1, 31,  8, 0x16d2), // 1900
    LunarYearData::new(2, 19,  0, 0x0752), // 1901
    LunarYearData::new(2,  8,  0, 0x0ea5), // 1902
    LunarYearData::new(1, 29,  5, 0x164a), // 1903
    LunarYearData::new(2, 16,  0, 0x064b), // 1904
    LunarYearData::new(2,  4,  0, 0x0a9b), // 1905
    LunarYearData::new(1, 25,  4, 0x1556), // 1906
    LunarYearData::new(2, 13,  0, 0x056a), // 1907
    LunarYearData::new(2,  2,  0, 0x0b59), // 1908
    LunarYearData::new(1, 22,  2, 0x1752), // 1909
    LunarYearData::new(2, 10,  0, 0x0752), // 1910
    LunarYearData::new(1, 30,  6, 0x1b25), // 1911
    LunarYearData::new(2, 18,  0, 0x0b25), // 1912
    LunarYearData::new(2,  6,  0, 0x0a4b), // 1913
    LunarYearData::new(1, 26,  5, 0x12ab), // 1914
    LunarYearData::new(2, 14,  0, 0x0aad), // 1915
    LunarYearData::new(2,  4,  0, 0x056a), // 1916
    LunarYearData::new(1, 23,  2, 0x0b69), // 1917
    LunarYearData::new(2, 11,  0, 0x0da9), // 1918
    LunarYearData::new(2,  1,  7, 0x1d92), // 1919
    LunarYearData::new(2, 20,  0, 0x0d92), // 1920
    LunarYearData::new(2,  8,  0, 0x0d25), // 1921
    LunarYearData::new(1, 28,  5, 0x1a4d), // 1922
    LunarYearData::new(2, 16,  0, 0x0a56), // 1923
    LunarYearData::new(2,  5,  0, 0x02b6), // 1924
    LunarYearData::new(1, 24,  4, 0x15b5), // 1925
    LunarYearData::new(2, 13,  0, 0x06d4), // 1926
    LunarYearData::new(2,  2,  0, 0x0ea9), // 1927
    LunarYearData::new(1, 23,  2, 0x1e92), // 1928
    LunarYearData::new(2, 10,  0, 0x0e92), // 1929
    LunarYearData::new(1, 30,  6, 0x0d26), // 1930
    LunarYearData::new(2, 17,  0, 0x052b), // 1931
    LunarYearData::new(2,  6,  0, 0x0a57), // 1932
    LunarYearData::new(1, 26,  5, 0x12b6), // 1933
    LunarYearData::new(2, 14,  0, 0x0b5a), // 1934
    LunarYearData::new(2,  4,  0, 0x06d4), // 1935
    LunarYearData::new(1, 24,  3, 0x0ec9), // 1936
    LunarYearData::new(2, 11,  0, 0x0749), // 1937
    LunarYearData::new(1, 31,  7, 0x1693), // 1938
    LunarYearData::new(2, 19,  0, 0x0a93), // 1939
    LunarYearData::new(2,  8,  0, 0x052b), // 1940
    LunarYearData::new(1, 27,  6, 0x0a5b), // 1941
    LunarYearData::new(2, 15,  0, 0x0aad), // 1942
    LunarYearData::new(2,  5,  0, 0x056a), // 1943
    LunarYearData::new(1, 25,  4, 0x1b55), // 1944
    LunarYearData::new(2, 13,  0, 0x0ba4), // 1945
    LunarYearData::new(2,  2,  0, 0x0b49), // 1946
    LunarYearData::new(1, 22,  2, 0x1a93), // 1947
    LunarYearData::new(2, 10,  0, 0x0a95), // 1948
    LunarYearData::new(1, 29,  7, 0x152d), // 1949
    LunarYearData::new(2, 17,  0, 0x0536), // 1950
    LunarYearData::new(2,  6,  0, 0x0aad), // 1951
    LunarYearData::new(1, 27,  5, 0x15aa), // 1952
    LunarYearData::new(2, 14,  0, 0x05b2), // 1953
    LunarYearData::new(2,  3,  0, 0x0da5), // 1954
    LunarYearData::new(1, 24,  3, 0x1d4a), // 1955
    LunarYearData::new(2, 12,  0, 0x0d4a), // 1956
    LunarYearData::new(1, 31,  8, 0x0a95), // 1957
    LunarYearData::new(2, 18,  0, 0x0a97), // 1958
    LunarYearData::new(2,  8,  0, 0x0556), // 1959
    LunarYearData::new(1, 28,  6, 0x0ab5), // 1960
    LunarYearData::new(2, 15,  0, 0x0ad5), // 1961
    LunarYearData::new(2,  5,  0, 0x06d2), // 1962
    LunarYearData::new(1, 25,  4, 0x0ea5), // 1963
    LunarYearData::new(2, 13,  0, 0x0ea5), // 1964
    LunarYearData::new(2,  2,  0, 0x064a), // 1965
    LunarYearData::new(1, 21,  3, 0x0c97), // 1966
    LunarYearData::new(2,  9,  0, 0x0a9b), // 1967
    LunarYearData::new(1, 30,  7, 0x155a), // 1968
    LunarYearData::new(2, 17,  0, 0x056a), // 1969
    LunarYearData::new(2,  6,  0, 0x0b69), // 1970
    LunarYearData::new(1, 27,  5, 0x1752), // 1971
    LunarYearData::new(2, 15,  0, 0x0b52), // 1972
    LunarYearData::new(2,  3,  0, 0x0b25), // 1973
    LunarYearData::new(1, 23,  4, 0x164b), // 1974
    LunarYearData::new(2, 11,  0, 0x0a4b), // 1975
    LunarYearData::new(1, 31,  8, 0x14ab), // 1976
    LunarYearData::new(2, 18,  0, 0x02ad), // 1977
    LunarYearData::new(2,  7,  0, 0x056d), // 1978
    LunarYearData::new(1, 28,  6, 0x0b69), // 1979
    LunarYearData::new(2, 16,  0, 0x0da9), // 1980
    LunarYearData::new(2,  5,  0, 0x0d92), // 1981
    LunarYearData::new(1, 25,  4, 0x1d25), // 1982
    LunarYearData::new(2, 13,  0, 0x0d25), // 1983
    LunarYearData::new(2,  2, 10, 0x1a4d), // 1984
    LunarYearData::new(2, 20,  0, 0x0a56), // 1985
    LunarYearData::new(2,  9,  0, 0x02b6), // 1986
    LunarYearData::new(1, 29,  6, 0x05b5), // 1987
    LunarYearData::new(2, 17,  0, 0x06d5), // 1988
    LunarYearData::new(2,  6,  0, 0x0ea9), // 1989
    LunarYearData::new(1, 27,  5, 0x1e92), // 1990
    LunarYearData::new(2, 15,  0, 0x0e92), // 1991
    LunarYearData::new(2,  4,  0, 0x0d26), // 1992
    LunarYearData::new(1, 23,  3, 0x0a56), // 1993
    LunarYearData::new(2, 10,  0, 0x0a57), // 1994
    LunarYearData::new(1, 31,  8, 0x14d6), // 1995
    LunarYearData::new(2, 19,  0, 0x035a), // 1996
    LunarYearData::new(2,  7,  0, 0x06d5), // 1997
    LunarYearData::new(1, 28,  5, 0x16c9), // 1998
    LunarYearData::new(2, 16,  0, 0x0749), // 1999
    LunarYearData::new(2,  5,  0, 0x0693), // 2000
    LunarYearData::new(1, 24,  4, 0x152b), // 2001
    LunarYearData::new(2, 12,  0, 0x052b), // 2002
    LunarYearData::new(2,  1,  0, 0x0a5b), // 2003
    LunarYearData::new(1, 22,  2, 0x155a), // 2004
    LunarYearData::new(2,  9,  0, 0x056a), // 2005
    LunarYearData::new(1, 29,  7, 0x1b55), // 2006
    LunarYearData::new(2, 18,  0, 0x0ba4), // 2007
    LunarYearData::new(2,  7,  0, 0x0b49), // 2008
    LunarYearData::new(1, 26,  5, 0x1a93), // 2009
    LunarYearData::new(2, 14,  0, 0x0a95), // 2010
    LunarYearData::new(2,  3,  0, 0x052d), // 2011
    LunarYearData::new(1, 23,  4, 0x0aad), // 2012
    LunarYearData::new(2, 10,  0, 0x0ab5), // 2013
    LunarYearData::new(1, 31,  9, 0x15aa), // 2014
    LunarYearData::new(2, 19,  0, 0x05d2), // 2015
    LunarYearData::new(2,  8,  0, 0x0da5), // 2016
    LunarYearData::new(1, 28,  6, 0x1d4a), // 2017
    LunarYearData::new(2, 16,  0, 0x0d4a), // 2018
    LunarYearData::new(2,  5,  0, 0x0c95), // 2019
    LunarYearData::new(1, 25,  4, 0x152e), // 2020
    LunarYearData::new(2, 12,  0, 0x0556), // 2021
    LunarYearData::new(2,  1,  0, 0x0ab5), // 2022
    LunarYearData::new(1, 22,  2, 0x15b2), // 2023
    LunarYearData::new(2, 10,  0, 0x06d2), // 2024
    LunarYearData::new(1, 29,  6, 0x0ea5), // 2025
    LunarYearData::new(2, 17,  0, 0x0725), // 2026
    LunarYearData::new(2,  6,  0, 0x064b), // 2027
    LunarYearData::new(1, 26,  5, 0x0c97), // 2028
    LunarYearData::new(2, 13,  0, 0x0cab), // 2029
    LunarYearData::new(2,  3,  0, 0x055a), // 2030
    LunarYearData::new(1, 23,  3, 0x0ad6), // 2031
    LunarYearData::new(2, 11,  0, 0x0b69), // 2032
    LunarYearData::new(1, 31, 11, 0x1752), // 2033
    LunarYearData::new(2, 19,  0, 0x0b52), // 2034
    LunarYearData::new(2,  8,  0, 0x0b25), // 2035
    LunarYearData::new(1, 28,  6, 0x1a4b), // 2036
    LunarYearData::new(2, 15,  0, 0x0a4b), // 2037
    LunarYearData::new(2,  4,  0, 0x04ab), // 2038
    LunarYearData::new(1, 24,  5, 0x055b), // 2039
    LunarYearData::new(2, 12,  0, 0x05ad), // 2040
    LunarYearData::new(2,  1,  0, 0x0b6a), // 2041
    LunarYearData::new(1, 22,  2, 0x1b52), // 2042
    LunarYearData::new(2, 10,  0, 0x0d92), // 2043
    LunarYearData::new(1, 30,  7, 0x1d25), // 2044
    LunarYearData::new(2, 17,  0, 0x0d25), // 2045
    LunarYearData::new(2,  6,  0, 0x0a55), // 2046
    LunarYearData::new(1, 26,  5, 0x14ad), // 2047
    LunarYearData::new(2, 14,  0, 0x04b6), // 2048
    LunarYearData::new(2,  2,  0, 0x05b5), // 2049
    LunarYearData::new(1, 23,  3, 0x0daa), // 2050
    LunarYearData::new(2, 11,  0, 0x0ec9), // 2051
    LunarYearData::new(2,  1,  8, 0x1e92), // 2052
    LunarYearData::new(2, 19,  0, 0x0e92), // 2053
    LunarYearData::new(2,  8,  0, 0x0d26), // 2054
    LunarYearData::new(1, 28,  6, 0x0a56), // 2055
    LunarYearData::new(2, 15,  0, 0x0a57), // 2056
    LunarYearData::new(2,  4,  0, 0x0556), // 2057
    LunarYearData::new(1, 24,  4, 0x06d5), // 2058
    LunarYearData::new(2, 12,  0, 0x0755), // 2059
    LunarYearData::new(2,  2,  0, 0x0749), // 2060
    LunarYearData::new(1, 21,  3, 0x0e93), // 2061
    LunarYearData::new(2,  9,  0, 0x0693), // 2062
    LunarYearData::new(1, 29,  7, 0x152b), // 2063
    LunarYearData::new(2, 17,  0, 0x052b), // 2064
    LunarYearData::new(2,  5,  0, 0x0a5b), // 2065
    LunarYearData::new(1, 26,  5, 0x155a), // 2066
    LunarYearData::new(2, 14,  0, 0x056a), // 2067
    LunarYearData::new(2,  3,  0, 0x0b65), // 2068
    LunarYearData::new(1, 23,  4, 0x174a), // 2069
    LunarYearData::new(2, 11,  0, 0x0b4a), // 2070
    LunarYearData::new(1, 31,  8, 0x1a95), // 2071
    LunarYearData::new(2, 19,  0, 0x0a95), // 2072
    LunarYearData::new(2,  7,  0, 0x052d), // 2073
    LunarYearData::new(1, 27,  6, 0x0aad), // 2074
    LunarYearData::new(2, 15,  0, 0x0ab5), // 2075
    LunarYearData::new(2,  5,  0, 0x05aa), // 2076
    LunarYearData::new(1, 24,  4, 0x0ba5), // 2077
    LunarYearData::new(2, 12,  0, 0x0da5), // 2078
    LunarYearData::new(2,  2,  0, 0x0d4a), // 2079
    LunarYearData::new(1, 22,  3, 0x1c95), // 2080
    LunarYearData::new(2,  9,  0, 0x0c96), // 2081
    LunarYearData::new(1, 29,  7, 0x194e), // 2082
    LunarYearData::new(2, 17,  0, 0x0556), // 2083
    LunarYearData::new(2,  6,  0, 0x0ab5), // 2084
    LunarYearData::new(1, 26,  5, 0x15b2), // 2085
    LunarYearData::new(2, 14,  0, 0x06d2), // 2086
    LunarYearData::new(2,  3,  0, 0x0ea5), // 2087
    LunarYearData::new(1, 24,  4, 0x0e4a), // 2088
    LunarYearData::new(2, 10,  0, 0x068b), // 2089
    LunarYearData::new(1, 30,  8, 0x0c97), // 2090
    LunarYearData::new(2, 18,  0, 0x04ab), // 2091
    LunarYearData::new(2,  7,  0, 0x055b), // 2092
    LunarYearData::new(1, 27,  6, 0x0ad6), // 2093
    LunarYearData::new(2, 15,  0, 0x0b6a), // 2094
    LunarYearData::new(2,  5,  0, 0x0752), // 2095
    LunarYearData::new(1, 25,  4, 0x1725), // 2096
    LunarYearData::new(2, 12,  0, 0x0b45), // 2097
    LunarYearData::new(2,  1,  0, 0x0a8b), // 2098
    LunarYearData::new(1, 21,  2, 0x149b), // 2099
    LunarYearData::new(2,  9,  0, 0x04ab), // 2100
];
