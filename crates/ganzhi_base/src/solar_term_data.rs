//! Reference table of solar-term instants, 1900–2100.
//!
//! Each row holds the 24 terms of one Gregorian year in canonical order
//! (Minor Cold first, Winter Solstice last) as whole UTC seconds elapsed
//! since 00:00 UTC on January 1 of that year. Instants are apparent
//! geocentric solar longitudes at multiples of 15 deg (VSOP87 series with
//! nutation and aberration), converted from TT to UT with the
//! Espenak–Meeus delta-T polynomials. Agreement with published almanacs is
//! within about a minute.

/// First Gregorian year in the table.
pub const SOLAR_TERM_FIRST_YEAR: i32 = 1900;

/// Last Gregorian year in the table.
pub const SOLAR_TERM_LAST_YEAR: i32 = 2100;

pub(crate) const TABLE_YEARS: usize = (SOLAR_TERM_LAST_YEAR - SOLAR_TERM_FIRST_YEAR + 1) as usize;

#[rustfmt::skip]
pub(crate) const SOLAR_TERM_OFFSETS: [[u32; 24]; TABLE_YEARS] = [
    // 1900
    [  410644,  1683151,  2958697,  4240880,  5530921,  6831549,  8142775,  9466037, 10799725, 12143828, 13495147, 14852397,
     16211417, 17570176, 18924639, 20272797, 21611805, 22940416, 24257591, 25563317, 26858384, 28144068, 29422553, 30696093],
    // 1901
    [  431609,  1703790,  2979598,  4261499,  5551859,  6852223,  8163871,  9486819, 10821036, 12164695, 13516599, 14873280,
     16232867, 17591040, 18945978, 20293657, 21633024, 22961339, 24278794, 25584377, 26879674, 28165275, 29443960, 30717399],
    // 1902
    [  453100,  1725126,  3001095,  4282789,  5573253,  6873399,  8185053,  9507860, 10841939, 12185625, 13537197, 14894114,
     16253189, 17611797, 18966144, 20314387, 21653192, 22982124, 24299112, 25605343, 26900266, 28186529, 29464864, 30738939],
    // 1903
    [  474230,  1746822,  3022283,  4304457,  5594335,  6894890,  8205957,  9529124, 10862732, 12206713, 13558044, 14915106,
     16274207, 17632730, 18987351, 20335300, 21674545, 23003027, 24320507, 25626189, 26921606, 28207288, 29486121, 30759628],
    // 1904
    [  495427,  1767477,  3043455,  4325098,  5615506,  6915515,  8227137,  9549730, 10883921, 12227344, 13579267, 14935892,
     16295510, 17653783, 19008711, 20356584, 21695875, 23024410, 24341733, 25647542, 26942699, 28228553, 29507126, 30780841],
    // 1905
    [  430038,  1702325,  2978160,  4260067,  5550345,  6850662,  8162080,  9485038, 10818854, 12162688, 13514022, 14871092,
     16230008, 17588744, 18943022, 20291320, 21630113, 22958998, 24275979, 25582074, 26876985, 28163090, 29441449, 30715426],
    // 1906
    [  450816,  1723406,  2999042,  4281278,  5571370,  6871974,  8183242,  9506359, 10840118, 12183905, 13535342, 14892113,
     16251324, 17609559, 18964304, 20312020, 21651383, 22979708, 24297301, 25602894, 26898419, 28184035, 29462965, 30736399],
    // 1907
    [  472291,  1744259,  3020343,  4301913,  5592436,  6892390,  8204097,  9526641, 10860827, 12204202, 13555986, 14912585,
     16271959, 17630287, 18984968, 20333017, 21672132, 23000941, 24318166, 25624295, 26919378, 28205523, 29483968, 30757892],
    // 1908
    [  493272,  1765690,  3041245,  4323248,  5613233,  6913651,  8224807,  9547890, 10881517, 12225501, 13576755, 14933954,
     16292886, 17651654, 19006007, 20354229, 21693148, 23021903, 24339058, 25645011, 26940124, 28226079, 29504623, 30778409],
    // 1909
    [  427525,  1699864,  2975567,  4257515,  5547666,  6847997,  8159387,  9482287, 10816268, 12159914, 13511651, 14868347,
     16227850, 17586036, 18940956, 20288615, 21628006, 22956277, 24273803, 25579363, 26874795, 28160423, 29439296, 30712795],
    // 1910
    [  448687,  1720751,  2996853,  4278500,  5568997,  6868985,  8180588,  9503158, 10837174, 12180621, 13532190, 14888929,
     16248074, 17606585, 18961039, 20309247, 21648140, 22977053, 24294077, 25600285, 26895216, 28181468, 29459825, 30733918],
    // 1911
    [  469266,  1741899,  3017430,  4299631,  5589540,  6890070,  8201084,  9524167, 10857634, 12201528, 13552687, 14909737,
     16268702, 17627321, 18981869, 20329985, 21669201, 22997855, 24315295, 25621094, 26916422, 28202158, 29480860, 30754396],
    // 1912
    [  490059,  1762155,  3038023,  4319743,  5610068,  6910166,  8221706,  9544352, 10878440, 12221846, 13573667, 14930228,
     16289812, 17648028, 19003033, 20350885, 21690346, 23018887, 24336411, 25642205, 26937522, 28223289, 29501938, 30775483],
    // 1913
    [  424684,  1696752,  2972568,  4254260,  5544546,  6844687,  8156163,  9478984, 10812889, 12156605, 13508014, 14864978,
     16223942, 17582626, 18936951, 20285291, 21624149, 22953166, 24270228, 25576496, 26871468, 28157717, 29436066, 30710094],
    // 1914
    [  445376,  1717914,  2993359,  4275481,  5565349,  6865850,  8176917,  9500003, 10833615, 12177468, 13528806, 14885706,
     16244842, 17603221, 18957921, 20305783, 21645154, 22973633, 24291293, 25597046, 26892666, 28178429, 29457427, 30730946],
    // 1915
    [  466821,  1738778,  3014732,  4296189,  5586499,  6886278,  8197763,  9520132, 10854178, 12197433, 13549217, 14905766,
     16265271, 17623587, 18978463, 20326504, 21665826, 22994630, 24312054, 25618183, 26913460, 28199608, 29478236, 30752144],
    // 1916
    [  487673,  1760017,  3035647,  4317486,  5607450,  6907618,  8218679,  9541482, 10874996, 12218761, 13569949, 14927073,
     16286019, 17644878, 18999299, 20347719, 21686705, 23015684, 24332873, 25639030, 26934137, 28220266, 29498776, 30772713],
    // 1917
    [  421777,  1694244,  2969862,  4251892,  5541897,  6842240,  8153402,  9476251, 10809949, 12153523, 13504997, 14861665,
     16221019, 17579269, 18934212, 20282021, 21621570, 22950010, 24267735, 25573419, 26869012, 28154688, 29433656, 30707138],
    // 1918
    [  443069,  1715081,  2991192,  4272768,  5563257,  6863144,  8174719,  9497134, 10831103, 12174340, 13525871, 14882386,
     16241542, 17599891, 18954450, 20302629, 21641730, 22970742, 24288023, 25594375, 26889533, 28175886, 29454388, 30728489],
    // 1919
    [  463890,  1736446,  3011970,  4294052,  5583935,  6884350,  8195332,  9518322, 10851731, 12195554, 13546605, 14903616,
     16262436, 17621069, 18975481, 20323698, 21662854, 22991714, 24309195, 25615276, 26910694, 28196715, 29475475, 30749227],
    // 1920
    [  484857,  1757066,  3032796,  4314544,  5604670,  6904763,  8216105,  9538759, 10872693, 12216120, 13567834, 14924396,
     16283921, 17642098, 18997095, 20344879, 21684394, 23012885, 24330551, 25636357, 26931895, 28217724, 29496623, 30770223],
    // 1921
    [  419632,  1691688,  2967620,  4249202,  5539512,  6839466,  8150929,  9473546, 10807468, 12151018, 13502500, 14859351,
     16218408, 17577021, 18931411, 20279711, 21618586, 22947586, 24264641, 25570938, 26865930, 28152269, 29430687, 30704848],
    // 1922
    [  440223,  1712887,  2988395,  4270583,  5560436,  6860925,  8171888,  9494923, 10828383, 12172224, 13523430, 14880411,
     16239462, 17597990, 18952639, 20300658, 21639984, 22968576, 24286169, 25591979, 26887515, 28173314, 29452238, 30725816],
    // 1923
    [  461647,  1733698,  3009632,  4291197,  5581480,  6881334,  8192761,  9515141, 10849106, 12192319, 13544063, 14900565,
     16260135, 17618433, 18973470, 20321511, 21661031, 22989814, 24307403, 25613452, 26908820, 28194818, 29473478, 30747199],
    // 1924
    [  482745,  1754912,  3030590,  4312293,  5602351,  6902422,  8213604,  9536326, 10869951, 12213635, 13564899, 14921967,
     16280968, 17639853, 18994339, 20342882, 21681940, 23011100, 24328338, 25634666, 26929755, 28215982, 29494381, 30768324],
    // 1925
    [  417199,  1689612,  2965012,  4246986,  5536797,  6837135,  8148156,  9471076, 10804681, 12148386, 13499790, 14856605,
     16215906, 17574298, 18929238, 20277195, 21616815, 22945408, 24263252, 25569070, 26864778, 28150529, 29429540, 30703002],
    // 1926
    [  438867,  1710756,  2986704,  4268090,  5558384,  6858076,  8169506,  9491777, 10825716, 12168881, 13520512, 14877007,
     16236347, 17594690, 18949459, 20297642, 21636957, 22965998, 24283494, 25589898, 26885260, 28171655, 29450320, 30724404],
    // 1927
    [  459885,  1732319,  3007814,  4289664,  5579426,  6879550,  8190378,  9513108, 10846401, 12190083, 13541101, 14898140,
     16257005, 17615806, 18970285, 20318729, 21657928, 22987017, 24304513, 25610808, 26906224, 28192444, 29471186, 30745110],
    // 1928
    [  480681,  1753003,  3028597,  4310363,  5600248,  6900263,  8211285,  9533813, 10867422, 12210754, 13562240, 14918797,
     16278266, 17636544, 18991657, 20339593, 21679313, 23007931, 24325802, 25631674, 26927380, 28213220, 29492248, 30765825],
    // 1929
    [  415332,  1687338,  2963330,  4244816,  5535125,  6834900,  8146288,  9468633, 10802435, 12145671, 13497062, 14853649,
     16212713, 17571204, 18925733, 20274082, 21613188, 22942346, 24259635, 25566094, 26861253, 28147690, 29426189, 30700371],
    // 1930
    [  435761,  1708388,  2983876,  4265996,  5555799,  6856194,  8167052,  9489959, 10823235, 12166933, 13517896, 14874775,
     16233592, 17592120, 18946626, 20294784, 21634108, 22962961, 24280657, 25586771, 26882420, 28168474, 29447438, 30721173],
    // 1931
    [  456942,  1729059,  3004850,  4286426,  5576536,  6876383,  8187635,  9509991, 10843788, 12186929, 13538513, 14894887,
     16254339, 17612486, 18967496, 20315422, 21655041, 22983801, 24301617, 25607733, 26903396, 28189485, 29468422, 30742178],
    // 1932
    [  477914,  1750013,  3025772,  4307309,  5597371,  6897222,  8208389,  9530891, 10864519, 12208005, 13559274, 14916165,
     16275140, 17633882, 18988310, 20336775, 21675776, 23004950, 24322180, 25628628, 26923780, 28210204, 29488705, 30762856],
    // 1933
    [  411808,  1684366,  2959764,  4241783,  5531491,  6831794,  8142638,  9465507, 10798917, 12142620, 13493853, 14850722,
     16209874, 17568333, 18923140, 20271143, 21610651, 22939266, 24257037, 25562885, 26858577, 28144406, 29423464, 30697052],
    // 1934
    [  432996,  1705023,  2981025,  4262504,  5552784,  6852481,  8163828,  9486017, 10819855, 12162899, 13514490, 14870877,
     16230276, 17588534, 18943425, 20291525, 21630967, 22959908, 24277497, 25583777, 26879202, 28165465, 29444196, 30718170],
    // 1935
    [  453750,  1726108,  3001733,  4283525,  5573418,  6873469,  8184389,  9507012, 10840338, 12183899, 13534907, 14891879,
     16250736, 17609580, 18964071, 20312645, 21651847, 22981089, 24298541, 25604950, 26900252, 28186523, 29465092, 30739025],
    // 1936
    [  474405,  1746739,  3022169,  4303988,  5593757,  6893874,  8204812,  9527472, 10861001, 12204458, 13555851, 14912508,
     16271904, 17630273, 18985390, 20333429, 21673238, 23001956, 24319951, 25625881, 26921679, 28207496, 29486533, 30759997],
    // 1937
    [  409429,  1681264,  2957142,  4238452,  5528674,  6828316,  8139694,  9461961, 10795845, 12139039, 13490579, 14847129,
     16206366, 17564818, 18919525, 20267870, 21607167, 22936375, 24253858, 25560392, 26855715, 28142190, 29420775, 30694900],
    // 1938
    [  430271,  1702729,  2978103,  4259980,  5549630,  6849788,  8160524,  9483287, 10816515, 12160210, 13511198, 14868210,
     16227084, 17585821, 18940364, 20288750, 21628090, 22957174, 24274889, 25581232, 26876901, 28163165, 29442115, 30716003],
    // 1939
    [  451678,  1723849,  2999438,  4280963,  5570778,  6870511,  8181450,  9503710, 10837270, 12180400, 13531899, 14888363,
     16247899, 17606198, 18961408, 20309473, 21649323, 22978167, 24296199, 25602350, 26898210, 28184306, 29463417, 30737151],
    // 1940
    [  473020,  1745042,  3020858,  4302227,  5592246,  6891829,  8202882,  9525061, 10858584, 12201790, 13553048, 14909789,
     16268883, 17627645, 18982295, 20330916, 21670158, 22999530, 24316941, 25623553, 26918804, 28205335, 29483874, 30758085],
    // 1941
    [  407040,  1679622,  2954992,  4236991,  5526612,  6826834,  8137505,  9460239, 10793403, 12136980, 13487964, 14844804,
     16203791, 17562367, 18917152, 20265410, 21605030, 22933965, 24251896, 25558031, 26853841, 28139868, 29418956, 30692652],
    // 1942
    [  428545,  1700619,  2976521,  4258012,  5548164,  6847842,  8159037,  9481153, 10814819, 12157722, 13509159, 14865377,
     16224713, 17582845, 18937817, 20285890, 21625564, 22954588, 24272507, 25578919, 26874675, 28161031, 29440013, 30713978],
    // 1943
    [  449699,  1721941,  2997616,  4279222,  5569120,  6868961,  8179878,  9502295, 10835610, 12178973, 13529941, 14886738,
     16245528, 17604271, 18958708, 20307302, 21646504, 22975898, 24293429, 25600095, 26895528, 28182090, 29460775, 30734947],
    // 1944
    [  470362,  1742829,  3018184,  4300030,  5589633,  6889717,  8200446,  9523076, 10856397, 12199862, 13551062, 14907743,
     16266962, 17625349, 18980329, 20328385, 21668134, 22996894, 24314926, 25620953, 26916879, 28202849, 29482061, 30755691],
    // 1945
    [  405275,  1677224,  2953171,  4234499,  5524686,  6824240,  8135513,  9457622, 10791405, 12134424, 13485934, 14842328,
     16201609, 17559919, 18914701, 20262913, 21602287, 22931384, 24248950, 25555414, 26850848, 28137309, 29416055, 30690214],
    // 1946
    [  425780,  1698282,  2973839,  4255717,  5545483,  6845564,  8156319,  9478934, 10812098, 12155638, 13506527, 14863461,
     16222253, 17581022, 18935498, 20283982, 21623245, 22952438, 24270050, 25576487, 26872032, 28158378, 29437209, 30711198],
    // 1947
    [  446785,  1719095,  2994630,  4276317,  5566083,  6865964,  8176816,  9499171, 10832588, 12175748, 13527077, 14883532,
     16242950, 17601251, 18956450, 20304538, 21644460, 22973314, 24291437, 25597547, 26893463, 28179454, 29458572, 30732162],
    // 1948
    [  468017,  1739904,  3015729,  4297004,  5587083,  6886614,  8197770,  9519902, 10853545, 12196669, 13548030, 14904645,
     16263815, 17622454, 18977184, 20325751, 21665100, 22994496, 24312017, 25618677, 26913996, 28200531, 29479061, 30753198],
    // 1949
    [  402073,  1674518,  2949776,  4231630,  5521161,  6821291,  8131921,  9454647, 10787804, 12131449, 13482419, 14839370,
     16198304, 17557002, 18911703, 20260094, 21599650, 22928748, 24246662, 25552978, 26848785, 28134966, 29414005, 30687780],
    // 1950
    [  423530,  1695585,  2971250,  4252652,  5542527,  6842111,  8153073,  9475154, 10808695, 12151637, 13503074, 14859370,
     16218806, 17576998, 18932114, 20280194, 21620021, 22949018, 24267102, 25573486, 26869422, 28155750, 29434898, 30708803],
    // 1951
    [  444629,  1716731,  2992417,  4273784,  5563606,  6863143,  8173961,  9496086, 10829364, 12172530, 13523561, 14880296,
     16239233, 17598038, 18952642, 20301362, 21640681, 22970203, 24287781, 25594560, 26890000, 28176664, 29455342, 30729604],
    // 1952
    [  464993,  1737511,  3012787,  4294610,  5584049,  6884031,  8194511,  9517007, 10850051, 12193441, 13544425, 14901159,
     16260282, 17618849, 18973860, 20322166, 21662021, 22991013, 24309143, 25615324, 26911292, 28197338, 29476537, 30750195],
    // 1953
    [  399730,  1671688,  2947561,  4228873,  5518954,  6818441,  8129565,  9451533, 10785148, 12127977, 13479375, 14835601,
     16194902, 17553129, 18908081, 20256314, 21595968, 22925157, 24243027, 25549574, 26845254, 28131722, 29410617, 30684691],
    // 1954
    [  420324,  1692674,  2968253,  4249949,  5539721,  6839613,  8150360,  9472780, 10805903, 12149249, 13500059, 14856848,
     16215560, 17574304, 18928753, 20277362, 21616675, 22946119, 24263842, 25570585, 26866235, 28152849, 29431706, 30705860],
    // 1955
    [  441360,  1713721,  2989074,  4270739,  5560275,  6860117,  8170738,  9493080, 10826289, 12169466, 13520608, 14877083,
     16236350, 17594671, 18949803, 20297937, 21637907, 22966853, 24285131, 25591380, 26887513, 28173652, 29452973, 30726657],
    // 1956
    [  462629,  1734509,  3010335,  4291497,  5581490,  6880837,  8191887,  9513822, 10847412, 12190366, 13541756, 14898230,
     16257480, 17615991, 18970813, 20319286, 21658740, 22988105, 24305762, 25612463, 26907960, 28194595, 29473330, 30747573],
    // 1957
    [  396631,  1669124,  2944486,  4226288,  5515815,  6815799,  8126336,  9448882, 10781909, 12125430, 13476291, 14833236,
     16192099, 17550892, 18905530, 20254055, 21593537, 22922770, 24240607, 25547060, 26842808, 28129148, 29408160, 30682124],
    // 1958
    [  417868,  1690117,  2965757,  4247310,  5537096,  6836753,  8147549,  9469626, 10802962, 12145865, 13497138, 14853415,
     16212808, 17571030, 18926232, 20274356, 21614327, 22943328, 24261546, 25567878, 26863912, 28150148, 29429377, 30703186],
    // 1959
    [  439105,  1711137,  2986938,  4268255,  5558200,  6857671,  8168588,  9490596, 10823936, 12166937, 13518012, 14874589,
     16233589, 17592323, 18947043, 20295810, 21635272, 22964903, 24282589, 25589457, 26884924, 28171613, 29450237, 30724460],
    // 1960
    [  459754,  1732209,  3007400,  4289185,  5578574,  6878565,  8189017,  9511560, 10844560, 12188018, 13538920, 14895741,
     16254759, 17613442, 18968382, 20316859, 21656722, 22985930, 24304123, 25610510, 26906523, 28192702, 29471863, 30745557],
    // 1961
    [  394956,  1666870,  2942548,  4223792,  5513685,  6813134,  8124133,  9446110, 10779682, 12122541, 13473968, 14830211,
     16189603, 17547815, 18902904, 20251112, 21590953, 22920149, 24238257, 25544844, 26840771, 28127263, 29406354, 30680371],
    // 1962
    [  416098,  1688278,  2963843,  4245277,  5534972,  6834575,  8145260,  9467446, 10800577, 12143792, 13494681, 14851447,
     16210267, 17569077, 18923619, 20272348, 21611717, 22941315, 24259076, 25566003, 26861696, 28148508, 29427396, 30701715],
    // 1963
    [  437192,  1709638,  2984874,  4266518,  5555835,  6855580,  8165924,  9488170, 10821123, 12164290, 13515267, 14871843,
     16231055, 17589553, 18944724, 20293050, 21633107, 22962205, 24280575, 25586928, 26883145, 28169362, 29448761, 30722514],
    // 1964
    [  458547,  1730469,  3006305,  4287445,  5577367,  6876596,  8187501,  9509232, 10842664, 12185390, 13536706, 14893009,
     16252323, 17610760, 18965770, 20314261, 21653966, 22983394, 24301286, 25608031, 26903702, 28190329, 29469182, 30743374],
    // 1965
    [  392520,  1664938,  2940371,  4222075,  5511642,  6811491,  8122007,  9444371, 10777300, 12120622, 13471337, 14828149,
     16186889, 17545690, 18900278, 20248959, 21588471, 22917961, 24235868, 25542595, 26838385, 28124943, 29403925, 30678025],
    // 1966
    [  413663,  1685984,  2961471,  4243068,  5532684,  6832377,  8142994,  9465095, 10798233, 12141124, 13492184, 14848407,
     16207624, 17565794, 18920935, 20269059, 21609114, 22938185, 24256601, 25563046, 26859318, 28145647, 29425068, 30698892],
    // 1967
    [  434905,  1706856,  2982658,  4263822,  5553721,  6853009,  8163889,  9485715, 10819055, 12161880, 13512982, 14869373,
     16228397, 17586952, 18941693, 20290344, 21629860, 22959477, 24277271, 25584224, 26879847, 28166669, 29445452, 30719781],
    // 1968
    [  455177,  1727652,  3002852,  4284558,  5573871,  6873728,  8184058,  9506481, 10839357, 12182765, 13533555, 14890403,
     16249300, 17608042, 18962833, 20311370, 21651085, 22980369, 24298463, 25604971, 26900955, 28187310, 29466494, 30740391],
    // 1969
    [  389812,  1661901,  2937540,  4218879,  5508644,  6808097,  8118899,  9440822, 10774197, 12116995, 13468304, 14824512,
     16183900, 17542091, 18897251, 20245402, 21585326, 22914417, 24232600, 25539063, 26835077, 28121464, 29400674, 30674625],
    // 1970
    [  410502,  1682636,  2958351,  4239715,  5529515,  6828985,  8139709,  9461698, 10794830, 12137835, 13488733, 14845354,
     16204228, 17563009, 18917642, 20266434, 21605869, 22935543, 24253295, 25560257, 26855865, 28142670, 29421439, 30695743],
    // 1971
    [  431114,  1703570,  2978738,  4260424,  5549695,  6849493,  8159767,  9482057, 10814892, 12158099, 13508928, 14865572,
     16224660, 17583280, 18938409, 20286914, 21627012, 22956293, 24274717, 25581185, 26877396, 28163629, 29442937, 30716627],
    // 1972
    [  452507,  1724338,  3000015,  4281086,  5570889,  6870090,  8180933,  9502656, 10836074, 12178775, 13530122, 14886372,
     16245773, 17604151, 18959313, 20307781, 21647705, 22977162, 24295304, 25602085, 26897963, 28184560, 29463521, 30737574],
    // 1973
    [  386716,  1658895,  2934252,  4215672,  5505157,  6804752,  8115238,  9437431, 10770395, 12113638, 13464420, 14821238,
     16180043, 17538931, 18893569, 20242405, 21581960, 22911663, 24229628, 25536603, 26832450, 28119237, 29398220, 30672466],
    // 1974
    [  408000,  1680345,  2955607,  4237119,  5526428,  6825999,  8136305,  9458337, 10791241, 12134170, 13485109, 14841462,
     16200667, 17559010, 18914226, 20262518, 21602701, 22931910, 24250481, 25557039, 26853480, 28139905, 29419478, 30693358],
    // 1975
    [  429457,  1701381,  2977163,  4258187,  5547955,  6847001,  8157695,  9479237, 10812437, 12155026, 13506125, 14862392,
     16221563, 17580107, 18935093, 20283814, 21623595, 22953310, 24271329, 25578365, 26874164, 28161044, 29439971, 30714333],
    // 1976
    [  449844,  1722310,  2997574,  4279201,  5568494,  6868184,  8178394,  9500589, 10833273, 12176477, 13527081, 14883857,
     16242655, 17601507, 18956306, 20305095, 21644895, 22974493, 24292684, 25599481, 26895515, 28182090, 29461258, 30735312],
    // 1977
    [  384666,  1656871,  2932408,  4213832,  5503456,  6802947,  8113554,  9435445, 10768573, 12111272, 13462335, 14818430,
     16177675, 17535816, 18891013, 20239213, 21579341, 22908557, 24227037, 25533640, 26829946, 28116417, 29395844, 30669789],
    // 1978
    [  405792,  1677845,  2953621,  4234860,  5524695,  6824015,  8134765,  9456577, 10789720, 12132511, 13483392, 14839777,
     16198620, 17557219, 18911863, 20260611, 21600143, 22929929, 24247857, 25555033, 26850845, 28137874, 29416802, 30691259],
    // 1979
    [  426698,  1699202,  2974346,  4255997,  5545183,  6844918,  8155081,  9477327, 10810036, 12153236, 13503914, 14860573,
     16219474, 17578111, 18933052, 20281601, 21621584, 22950979, 24269401, 25576064, 26872366, 28158842, 29438267, 30712186],
    // 1980
    [  448135,  1720122,  2995774,  4276906,  5566598,  6865789,  8176489,  9498173, 10831478, 12174137, 13525437, 14881631,
     16241043, 17599321, 18954514, 20302834, 21642803, 22972116, 24290350, 25597047, 26893092, 28179682, 29458874, 30732967],
    // 1981
    [  382359,  1654565,  2930127,  4211505,  5501111,  6800577,  8111108,  9433119, 10766096, 12109171, 13459970, 14816688,
     16175521, 17534388, 18889032, 20237887, 21577386, 22907108, 24224966, 25531968, 26827706, 28114557, 29393476, 30667838],
    // 1982
    [  403359,  1675857,  2951129,  4232789,  5522077,  6821750,  8131967,  9454053, 10786809, 12129780, 13480562, 14836986,
     16196079, 17554530, 18909708, 20258115, 21598300, 22927570, 24246124, 25552662, 26849043, 28135393, 29414886, 30688690],
    // 1983
    [  424729,  1696621,  2972390,  4253435,  5543235,  6842322,  8153063,  9474614, 10807857, 12150395, 13501548, 14857725,
     16216989, 17575445, 18930572, 20279243, 21619197, 22948890, 24267060, 25574048, 26869926, 28156689, 29435613, 30709791],
    // 1984
    [  445253,  1717510,  2992734,  4274182,  5563487,  6863066,  8173344,  9495495, 10828263, 12171467, 13522125, 14878940,
     16237749, 17596689, 18951472, 20300402, 21640185, 22969967, 24288148, 25595132, 26891125, 28177831, 29456877, 30730966],
    // 1985
    [  380102,  1652255,  2927508,  4208847,  5498186,  6797629,  8108018,  9429949, 10762955, 12105777, 13456802, 14813046,
     16172316, 17530585, 18885855, 20234141, 21574379, 22903646, 24222266, 25528905, 26825360, 28111839, 29391374, 30665260],
    // 1986
    [  401282,  1673177,  2948866,  4229855,  5519535,  6818564,  8129174,  9450732, 10783841, 12126476, 13477464, 14833800,
     16192846, 17551468, 18906338, 20255149, 21594876, 22924734, 24242806, 25550048, 26845963, 28133047, 29412046, 30686520],
    // 1987
    [  421981,  1694426,  2969508,  4251003,  5540027,  6839525,  8149457,  9471463, 10803941, 12147008, 13497540, 14854247,
     16213118, 17571964, 18926954, 20275787, 21615844, 22945510, 24263977, 25570847, 26867141, 28153760, 29433133, 30707154],
    // 1988
    [  443013,  1715066,  2990580,  4271723,  5561208,  6860332,  8170758,  9492304, 10825316, 12167815, 13518902, 14874994,
     16234373, 17592660, 18948016, 20296435, 21636690, 22966128, 24284667, 25591445, 26887733, 28174320, 29453669, 30727679],
    // 1989
    [  377159,  1649228,  2924835,  4206040,  5495655,  6794904,  8105401,  9427144, 10760044, 12102819, 13453525, 14809985,
     16168770, 17527527, 18882229, 20231171, 21570831, 22900784, 24218842, 25526115, 26822013, 28109078, 29388059, 30662526],
    // 1990
    [  398000,  1670499,  2945644,  4227243,  5516363,  6815957,  8125981,  9447995, 10780530, 12123445, 13473982, 14830370,
     16189229, 17547693, 18902729, 20251246, 21591442, 22920927, 24239626, 25546435, 26843010, 28129612, 29409250, 30683217],
    // 1991
    [  419289,  1691226,  2966908,  4247899,  5537537,  6836516,  8147086,  9468511, 10801620, 12144022, 13495099, 14851124,
     16210372, 17568664, 18923830, 20272364, 21612434, 22942079, 24260463, 25567504, 26863669, 28150538, 29429760, 30704019],
    // 1992
    [  439714,  1711956,  2987301,  4268615,  5557930,  6857287,  8167512,  9489422, 10822127, 12165135, 13515743, 14872445,
     16231208, 17590119, 18944835, 20293794, 21633493, 22963357, 24281479, 25588618, 26884612, 28171544, 29450644, 30724991],
    // 1993
    [  374188,  1646571,  2921830,  4203314,  5492556,  6792042,  8102233,  9424143, 10756907, 12099707, 13450520, 14806784,
     16165922, 17524247, 18879474, 20227815, 21568062, 22897347, 24215994, 25522622, 26819125, 28105603, 29385222, 30659144],
    // 1994
    [  395284,  1667244,  2943057,  4224099,  5513866,  6812881,  8123513,  9444961, 10778048, 12120508, 13471492, 14827652,
     16186758, 17545259, 18900255, 20249019, 21588901, 22918748, 24236941, 25544155, 26840130, 28127146, 29406167, 30680558],
    // 1995
    [  416047,  1688430,  2963577,  4245048,  5534171,  6833671,  8143692,  9465696, 10798206, 12141257, 13491749, 14848465,
     16207259, 17566179, 18921102, 20270083, 21610110, 22939975, 24258431, 25565488, 26861735, 28148478, 29427733, 30701805],
    // 1996
    [  437487,  1709555,  2984879,  4266052,  5555384,  6854591,  8164924,  9486599, 10819565, 12162192, 13513250, 14869423,
     16228799, 17587120, 18942529, 20290963, 21631339, 22960799, 24279515, 25586320, 26882791, 28169366, 29448839, 30722755],
    // 1997
    [  372267,  1644155,  2919718,  4200693,  5490250,  6789284,  8099781,  9421377, 10754376, 12097082, 13447962, 14804400,
     16163367, 17522127, 18876980, 20225954, 21565729, 22895750, 24213903, 25521281, 26817269, 28104447, 29383490, 30658024],
    // 1998
    [  393493,  1665967,  2941013,  4222493,  5511437,  6810873,  8120702,  9442607, 10774997, 12117933, 13468411, 14824960,
     16183825, 17542521, 18897582, 20246330, 21586550, 22916229, 24234944, 25541913, 26838502, 28125248, 29404895, 30678987],
    // 1999
    [  415034,  1687048,  2962632,  4243617,  5533069,  6831955,  8142284,  9463570, 10796467, 12138756, 13489753, 14845752,
     16205101, 17563449, 18918846, 20267459, 21607794, 22937485, 24256100, 25563134, 26859475, 28146291, 29425651, 30699832],
    // 2000
    [  435646,  1707791,  2983229,  4264407,  5553765,  6852924,  8163127,  9484783, 10817421, 12160175, 13510724, 14867266,
     16226041, 17584963, 18939782, 20288910, 21628750, 22958853, 24277088, 25584445, 26880479, 28167560, 29446622, 30721052],
    // 2001
    [  370160,  1642587,  2917736,  4199246,  5488360,  6787854,  8097875,  9419764, 10752305, 12095066, 13445631, 14801873,
     16160811, 17519182, 18874346, 20222833, 21563171, 22892671, 24211498, 25518335, 26815008, 28101624, 29381331, 30655290],
    // 2002
    [  391416,  1663330,  2939057,  4220008,  5509665,  6808572,  8119106,  9440431, 10773442, 12115748, 13466686, 14822664,
     16181768, 17540094, 18895155, 20243818, 21583862, 22913724, 24232161, 25539469, 26835711, 28122821, 29402058, 30676468],
    // 2003
    [  412076,  1684369,  2959536,  4240828,  5529907,  6829197,  8139159,  9460977, 10793432, 12136350, 13486781, 14843425,
     16202132, 17561041, 18915854, 20264884, 21604817, 22934810, 24253236, 25560508, 26856792, 28143798, 29423108, 30697426],
    // 2004
    [  433114,  1705347,  2980577,  4261807,  5550942,  6850123,  8160201,  9481829, 10814550, 12157158, 13508031, 14864211,
     16223478, 17581808, 18937176, 20285591, 21625974, 22955390, 24274158, 25580932, 26877514, 28164100, 29443734, 30717695],
    // 2005
    [  367376,  1639296,  2914981,  4195920,  5485512,  6784408,  8094861,  9416239, 10749176, 12091648, 13442517, 14798768,
     16157796, 17516443, 18871400, 20220324, 21560193, 22890187, 24208388, 25515735, 26811739, 28098893, 29377960, 30652494],
    // 2006
    [  388017,  1660513,  2935631,  4217128,  5506119,  6805533,  8115335,  9437169, 10769446, 12112300, 13462623, 14819152,
     16177883, 17536661, 18891642, 20240552, 21580739, 22910600, 24229280, 25536384, 26832890, 28119701, 29399210, 30673326],
    // 2007
    [  409214,  1681254,  2956696,  4237738,  5527080,  6826045,  8136281,  9457631, 10790428, 12132726, 13483627, 14839587,
     16198900, 17557207, 18912672, 20261271, 21601768, 22931473, 24250293, 25557327, 26853842, 28140591, 29420042, 30694066],
    // 2008
    [  429889,  1701816,  2977226,  4258179,  5547529,  6846502,  8156754,  9478275, 10811011, 12153661, 13504313, 14860764,
     16219615, 17578489, 18933371, 20282533, 21622448, 22952671, 24270997, 25578523, 26874635, 28161864, 29440938, 30715428],
    // 2009
    [  364446,  1636822,  2911787,  4193172,  5482058,  6781424,  8091234,  9413070, 10745459, 12088278, 13438753, 14795133,
     16154011, 17512543, 18867667, 20216313, 21556655, 22886317, 24205200, 25512208, 26808971, 28095750, 29375532, 30649606],
    // 2010
    [  385729,  1657663,  2933274,  4214137,  5503584,  6802331,  8112634,  9433790, 10766645, 12108838, 13459767, 14815708,
     16174945, 17533277, 18888545, 20237216, 21577480, 22907345, 24225995, 25533307, 26829753, 28116870, 29396306, 30670708],
    // 2011
    [  406484,  1678718,  2953980,  4235122,  5524197,  6823241,  8133117,  9454647, 10786992, 12129674, 13480039, 14836590,
     16195319, 17554309, 18909207, 20258434, 21598451, 22928670, 24247140, 25554613, 26850893, 28138066, 29417340, 30691803],
    // 2012
    [  427438,  1699796,  2974948,  4256263,  5545265,  6844468,  8154337,  9475930, 10808387, 12150941, 13501563, 14857730,
     16216847, 17575252, 18930634, 20279209, 21619739, 22949336, 24268296, 25575208, 26871949, 28158601, 29438331, 30712295],
    // 2013
    [  362019,  1633909,  2909609,  4190501,  5480094,  6778917,  8089352,  9410599, 10743496, 12085776, 13436609, 14792644,
     16151682, 17510163, 18865219, 20214099, 21554171, 22884247, 24202706, 25510188, 26806430, 28093684, 29372913, 30647460],
    // 2014
    [  383054,  1655474,  2930597,  4211970,  5500939,  6800227,  8110004,  9431735, 10763968, 12106747, 13456986, 14813479,
     16172091, 17530889, 18885751, 20234760, 21574887, 22904944, 24223651, 25531023, 26827603, 28114690, 29394250, 30668582],
    // 2015
    [  404438,  1676598,  2951911,  4232991,  5522141,  6821111,  8131151,  9452519, 10785162, 12127495, 13478292, 14834276,
     16193535, 17551828, 18907285, 20255832, 21596374, 22926028, 24244968, 25552001, 26848713, 28135512, 29415197, 30689277],
    // 2016
    [  425306,  1697235,  2972769,  4253632,  5543016,  6841817,  8152056,  9473375, 10806121, 12148600, 13499320, 14855655,
     16214607, 17573413, 18928383, 20277508, 21617465, 22947668, 24265997, 25573532, 26869653, 28156938, 29436061, 30710647],
    // 2017
    [  359743,  1632219,  2907247,  4188686,  5477568,  6776919,  8086640,  9408417, 10740663, 12083455, 13433797, 14790244,
     16149038, 17507719, 18862797, 20211614, 21551918, 22881708, 24200525, 25507598, 26804264, 28091074, 29370756, 30644874],
    // 2018
    [  380926,  1652942,  2928513,  4209482,  5498894,  6797727,  8107969,  9429151, 10761919, 12104075, 13454943, 14810833,
     16170107, 17528419, 18883834, 20232513, 21572982, 22902847, 24221683, 25528938, 26825496, 28112475, 29391946, 30666154],
    // 2019
    [  401935,  1673970,  2949257,  4230236,  5519382,  6818306,  8128286,  9449718, 10782165, 12124749, 13475183, 14831654,
     16190432, 17549421, 18904381, 20253713, 21593809, 22924203, 24242736, 25550381, 26846658, 28133930, 29413101, 30687560],
    // 2020
    [  423002,  1695281,  2970199,  4251426,  5540214,  6839381,  8149093,  9470735, 10803091, 12145763, 13496309, 14852617,
     16211668, 17570209, 18925568, 20274288, 21614871, 22944629, 24263703, 25570769, 26867630, 28154385, 29434170, 30708141],
    // 2021
    [  357806,  1629593,  2905128,  4185839,  5475221,  6773846,  8084110,  9405203, 10738038, 12080230, 13431130, 14787129,
     16146324, 17504782, 18860030, 20208897, 21549174, 22879264, 24197939, 25505466, 26801922, 28089219, 29368626, 30643159],
    // 2022
    [  378848,  1651146,  2926248,  4207380,  5496225,  6795202,  8104813,  9426254, 10758356, 12100959, 13451149, 14807635,
     16166279, 17525218, 18880142, 20229365, 21569537, 22899821, 24218549, 25526142, 26822728, 28110022, 29389572, 30664084],
    // 2023
    [  399889,  1672169,  2947352,  4228456,  5517371,  6816264,  8125981,  9447218, 10779525, 12121753, 13472299, 14828267,
     16187440, 17545826, 18901372, 20250071, 21590801, 22920593, 24239734, 25546849, 26843731, 28130557, 29410371, 30684438],
    // 2024
    [  420558,  1692442,  2968025,  4248793,  5538163,  6836787,  8146939,  9467991, 10800609, 12142773, 13493392, 14849451,
     16208396, 17567054, 18922146, 20271293, 21611473, 22941815, 24260387, 25568080, 26864390, 28151780, 29431009, 30705624],
    // 2025
    [  354757,  1627200,  2902223,  4183590,  5472434,  6771685,  8081314,  9402958, 10735036, 12077680, 13427793, 14784132,
     16142695, 17501364, 18856288, 20205228, 21545510, 22875554, 24194464, 25501848, 26798635, 28085724, 29365467, 30639773],
    // 2026
    [  375782,  1647887,  2923322,  4204307,  5493533,  6792349,  8102395,  9423542, 10756118, 12098203, 13448894, 14804665,
     16163810, 17521979, 18877355, 20225920, 21566470, 22896305, 24215350, 25522666, 26819512, 28106587, 29386344, 30660605],
    // 2027
    [  396594,  1668585,  2943973,  4224805,  5513966,  6812680,  8122646,  9443857, 10776308, 12118695, 13469146, 14825446,
     16184220, 17543071, 18897996, 20247247, 21587299, 22917693, 24236218, 25543965, 26840305, 28127764, 29407050, 30681722],
    // 2028
    [  417271,  1689715,  2964668,  4245963,  5534680,  6833825,  8143379,  9464964, 10797129, 12139786, 13490158, 14846514,
     16205416, 17564032, 18919260, 20268042, 21608514, 22938308, 24257299, 25564399, 26861227, 28148057, 29427870, 30701970],
    // 2029
    [  351705,  1623643,  2899237,  4180066,  5469447,  6768108,  8078298,  9399333, 10732063, 12074147, 13424995, 14780892,
     16140138, 17498523, 18853895, 20202691, 21543103, 22873100, 24191875, 25499276, 26795795, 28082952, 29362422, 30636838],
    // 2030
    [  372626,  1644849,  2920093,  4201181,  5490183,  6789110,  8098849,  9420204, 10752370, 12094861, 13445060, 14801470,
     16160115, 17519080, 18874024, 20223369, 21563558, 22893997, 24212700, 25520415, 26816905, 28104256, 29383644, 30658164],
    // 2031
    [  393783,  1666071,  2941093,  4222246,  5511050,  6810046,  8119690,  9441066, 10773303, 12115670, 13466133, 14822217,
     16181321, 17539814, 18895362, 20244181, 21584996, 22914903, 24234165, 25541352, 26838321, 28125137, 29404953, 30678917],
    // 2032
    [  414953,  1686670,  2962128,  4242727,  5532001,  6830504,  8140644,  9461637, 10794342, 12136488, 13487268, 14843312,
     16202443, 17561072, 18916350, 20265488, 21605860, 22936239, 24255005, 25562759, 26859235, 28146655, 29425981, 30700540],
    // 2033
    [  349673,  1621954,  2896887,  4178022,  5466736,  6765756,  8075282,  9396779, 10728821, 12071452, 13421599, 14778059,
     16136688, 17495562, 18850534, 20199703, 21540011, 22870288, 24189220, 25496837, 26793643, 28080945, 29360675, 30635139],
    // 2034
    [  371057,  1643224,  2918461,  4199404,  5488337,  6787043,  8096768,  9417816, 10750140, 12092206, 13442787, 14798642,
     16157846, 17516170, 18871732, 20220450, 21561227, 22891159, 24210417, 25517774, 26814806, 28101883, 29381797, 30656029],
    // 2035
    [  392136,  1664051,  2939490,  4220168,  5509294,  6807762,  8117627,  9438536, 10770889, 12113001, 13463438, 14819573,
     16178456, 17537304, 18892447, 20241836, 21582138, 22912724, 24231450, 25539361, 26835819, 28123384, 29402719, 30677444],
    // 2036
    [  413000,  1685457,  2960387,  4241652,  5530297,  6829360,  8138764,  9460219, 10792157, 12134686, 13484812, 14841119,
     16199840, 17558543, 18913719, 20262730, 21603286, 22933390, 24252530, 25559924, 26856867, 28143907, 29423747, 30697960],
    // 2037
    [  347631,  1619613,  2895087,  4175922,  5465158,  6763799,  8073829,  9394803, 10727359, 12069319, 13420003, 14775739,
     16134899, 17493145, 18848564, 20197307, 21537915, 22867970, 24187053, 25494577, 26791429, 28078687, 29358424, 30632846],
    // 2038
    [  368790,  1640908,  2916206,  4197107,  5486110,  6784821,  8094552,  9415698, 10747859, 12090152, 13440324, 14796552,
     16155137, 17513980, 18868863, 20218191, 21558362, 22888916, 24207680, 25515624, 26812236, 28099865, 29379371, 30654127],
    // 2039
    [  389789,  1662207,  2937159,  4218328,  5506963,  6805908,  8115333,  9436658, 10768679, 12111043, 13461313, 14817426,
     16176353, 17534870, 18890268, 20239099, 21579825, 22909760, 24229021, 25536289, 26833354, 28120313, 29400286, 30674420],
    // 2040
    [  410603,  1682452,  2957980,  4238616,  5527856,  6826286,  8136316,  9457160, 10789753, 12131733, 13482473, 14838370,
     16197542, 17556035, 18911388, 20260387, 21600831, 22931080, 24249915, 25557570, 26854140, 28141515, 29420985, 30695552],
    // 2041
    [  344871,  1617182,  2892297,  4173425,  5462260,  6761194,  8070743,  9392081, 10724062, 12066522, 13416575, 14772940,
     16131495, 17490387, 18845303, 20194563, 21534797, 22865176, 24184000, 25491698, 26788367, 28075737, 29355331, 30629880],
    // 2042
    [  365696,  1637987,  2913160,  4194255,  5483135,  6781985,  8091625,  9412772, 10744957, 12087065, 13437479, 14793341,
     16152423, 17510766, 18866311, 20215070, 21555918, 22885878, 24205226, 25512556, 26809641, 28096624, 29376538, 30650631],
    // 2043
    [  386710,  1658486,  2933914,  4214490,  5503650,  6802054,  8111999,  9432852, 10765308, 12107336, 13457873, 14813889,
     16172860, 17531591, 18886830, 20236168, 21576593, 22907199, 24226048, 25533998, 26830533, 28118090, 29397423, 30672059],
    // 2044
    [  407535,  1679834,  2954644,  4235737,  5524278,  6823219,  8132571,  9453991, 10785922, 12128504, 13478630, 14835053,
     16193745, 17552588, 18907704, 20256867, 21597372, 22927652, 24246776, 25554360, 26851298, 28138502, 29418294, 30692600],
    // 2045
    [  342138,  1614119,  2889366,  4170127,  5459087,  6757640,  8067425,  9388358, 10720763, 12062753, 13413411, 14769224,
     16128470, 17486792, 18842360, 20191136, 21531910, 22861960, 24181221, 25488732, 26785770, 28073011, 29352920, 30627291],
    // 2046
    [  363348,  1635336,  2910653,  4191325,  5480254,  6778661,  8088284,  9409124, 10741230, 12083303, 13433525, 14789673,
     16148408, 17507309, 18862385, 20211855, 21552185, 22882888, 24201735, 25509801, 26806438, 28094163, 29373664, 30648495],
    // 2047
    [  384130,  1656586,  2931469,  4212614,  5501104,  6799953,  8109151,  9430346, 10762103, 12104386, 13454441, 14810598,
     16169422, 17528117, 18883542, 20232637, 21573476, 22903672, 24223046, 25530501, 26827621, 28114681, 29394645, 30668822],
    // 2048
    [  404953,  1676819,  2952269,  4232904,  5522039,  6820424,  8130312,  9451042, 10783469, 12125277, 13475894, 14831627,
     16190801, 17549208, 18904719, 20253741, 21594470, 22924825, 24243987, 25551748, 26848590, 28135991, 29415629, 30690118],
    // 2049
    [  339509,  1611661,  2886795,  4167730,  5456567,  6755303,  8064849,  9385992, 10717947, 12060215, 13410208, 14766423,
     16124911, 17483765, 18838659, 20188029, 21528318, 22858941, 24177885, 25485894, 26782687, 28070340, 29349984, 30624713],
    // 2050
    [  360463,  1632816,  2907820,  4188895,  5477552,  6776362,  8085777,  9406914, 10738898, 12081031, 13431266, 14787158,
     16146089, 17504461, 18859929, 20208744, 21549630, 22879697, 24199198, 25506688, 26803997, 28091155, 29371285, 30645502],
    // 2051
    [  381712,  1653509,  2928948,  4209430,  5498502,  6796734,  8106561,  9427221, 10759608, 12101468, 13452024, 14807901,
     16166949, 17525555, 18880889, 20230128, 21570661, 22901225, 24220211, 25528190, 26824904, 28112549, 29392090, 30666824],
    // 2052
    [  402491,  1674835,  2949761,  4230802,  5519354,  6818148,  8127422,  9448659, 10780475, 12122923, 13472951, 14829354,
     16187984, 17546912, 18901971, 20251263, 21591698, 22922115, 24241163, 25548889, 26845769, 28133137, 29412905, 30687408],
    // 2053
    [  336945,  1609131,  2884363,  4165293,  5454179,  6752824,  8062454,  9383399, 10715601, 12057559, 13408038, 14763830,
     16123006, 17481352, 18836978, 20185795, 21526696, 22856756, 24176143, 25483612, 26780749, 28067909, 29347897, 30622179],
    // 2054
    [  358320,  1630237,  2905656,  4186274,  5475311,  6773650,  8083364,  9404090, 10736255, 12078167, 13428431, 14784415,
     16143208, 17502016, 18857199, 20206689, 21547159, 22877954, 24196919, 25505072, 26801757, 28089511, 29368983, 30643778],
    // 2055
    [  379336,  1651725,  2926529,  4207623,  5496063,  6794902,  8104073,  9425298, 10757017, 12099359, 13449340, 14805579,
     16164301, 17523105, 18878446, 20227696, 21568517, 22898914, 24218331, 25525989, 26823147, 28110355, 29390286, 30664520],
    // 2056
    [  400522,  1672361,  2947614,  4228183,  5517112,  6815450,  8125185,  9445912, 10778268, 12120101, 13470725, 14826476,
     16185722, 17544115, 18899742, 20248727, 21589617, 22919954, 24239326, 25547103, 26844179, 28131595, 29411433, 30685877],
    // 2057
    [  335384,  1607391,  2882536,  4163230,  5452005,  6750459,  8059941,  9380836, 10712788, 12054902, 13404964, 14761133,
     16119727, 17478628, 18833617, 20183087, 21523430, 22854181, 24173155, 25481323, 26778149, 28065982, 29345658, 30620551],
    // 2058
    [  356295,  1628742,  2903654,  4184718,  5473174,  6771883,  8081019,  9402037, 10733743, 12075830, 13425866, 14781830,
     16140676, 17499211, 18854698, 20203705, 21544662, 22874884, 24194456, 25502044, 26799408, 28086631, 29366809, 30641085],
    // 2059
    [  377335,  1649178,  2924620,  4205098,  5494105,  6792243,  8101931,  9422405, 10754628, 12096264, 13446726, 14802424,
     16161516, 17520037, 18875547, 20224794, 21565575, 22896193, 24215416, 25523427, 26820316, 28107940, 29387596, 30662266],
    // 2060
    [  398018,  1670278,  2945280,  4226222,  5514830,  6813494,  8122769,  9443828, 10775561, 12117801, 13467684, 14823928,
     16182424, 17541328, 18896327, 20245753, 21586212, 22916874, 24235993, 25543989, 26840914, 28128499, 29408235, 30682868],
    // 2061
    [  332292,  1604541,  2879612,  4160574,  5449284,  6747958,  8057405,  9378374, 10710376, 12052325, 13402586, 14758328,
     16117314, 17475611, 18831155, 20179974, 21520937, 22851066, 24170633, 25478216, 26775579, 28062837, 29343009, 30617313],
    // 2062
    [  353544,  1625389,  2900804,  4181278,  5470265,  6768433,  8078105,  9398662, 10730827, 12072572, 13422867, 14778668,
     16137487, 17496110, 18851318, 20200678, 21541206, 22871974, 24191053, 25499279, 26796128, 28084007, 29363648, 30638545],
    // 2063
    [  374218,  1646625,  2921453,  4202466,  5490842,  6789539,  8098597,  9419688, 10751288, 12093564, 13443440, 14799698,
     16158313, 17517180, 18872387, 20221708, 21562391, 22892875, 24212193, 25519977, 26817096, 28104478, 29384416, 30658847],
    // 2064
    [  394856,  1666867,  2942073,  4222742,  5511542,  6809897,  8119440,  9440130, 10772293, 12114083, 13464586, 14820319,
     16179555, 17537943, 18893639, 20242585, 21583560, 22913806, 24233256, 25540916, 26838073, 28125382, 29405330, 30679701],
    // 2065
    [  329349,  1601310,  2876605,  4157240,  5446132,  6744473,  8054015,  9374735, 10706707, 12048625, 13398710, 14754731,
     16113387, 17472247, 18827338, 20176866, 21517299, 22848136, 24167134, 25475353, 26772127, 28059965, 29339543, 30614418],
    // 2066
    [  350062,  1622502,  2897340,  4178424,  5466828,  6765575,  8074646,  9395702, 10727303, 12069433, 13419334, 14775369,
     16134095, 17492755, 18848194, 20197386, 21538381, 22868802, 24188433, 25496163, 26793530, 28080795, 29360886, 30635114],
    // 2067
    [  371205,  1642959,  2918224,  4198629,  5487497,  6785609,  8095224,  9415707, 10747919, 12089561, 13440065, 14795743,
     16154933, 17513416, 18869082, 20218310, 21559310, 22889957, 24209437, 25517493, 26814611, 28102225, 29382020, 30656574],
    // 2068
    [  392351,  1664387,  2939329,  4219990,  5508519,  6806923,  8116168,  9437048, 10768825, 12110984, 13460954, 14817206,
     16175790, 17534780, 18889845, 20239417, 21579926, 22910788, 24229965, 25538201, 26835187, 28123004, 29402756, 30677546],
    // 2069
    [  326887,  1599173,  2874039,  4154923,  5443336,  6741883,  8051019,  9371905, 10703667, 12045647, 13395783, 14751663,
     16110635, 17469120, 18824736, 20173737, 21514819, 22845094, 24164804, 25472506, 26770028, 28057393, 29337718, 30612100],
    // 2070
    [  348428,  1620276,  2895686,  4176052,  5464922,  6762873,  8072362,  9392649, 10724666, 12066181, 13416462, 14772141,
     16131104, 17489718, 18845174, 20194604, 21535405, 22866266, 24185581, 25493881, 26790911, 28078836, 29358622, 30633540],
    // 2071
    [  369333,  1641725,  2916628,  4197560,  5485932,  6784463,  8093415,  9414275, 10745694, 12087755, 13437453, 14793623,
     16152143, 17511105, 18866321, 20215884, 21556649, 22887439, 24206850, 25514922, 26812090, 28099693, 29379616, 30654209],
    // 2072
    [  390153,  1662288,  2937397,  4218162,  5506832,  6805240,  8114601,  9435279, 10767206, 12108917, 13459175, 14814807,
     16173886, 17532226, 18887935, 20236925, 21578079, 22908444, 24228169, 25535965, 26833401, 28120797, 29400956, 30675330],
    // 2073
    [  325103,  1596991,  2872345,  4152860,  5441779,  6739973,  8049529,  9370071, 10702047, 12043749, 13393816, 14749599,
     16108226, 17466891, 18821990, 20171450, 21511970, 22842886, 24162047, 25470449, 26767417, 28055458, 29335196, 30610215],
    // 2074
    [  345938,  1618424,  2893254,  4174301,  5462634,  6761311,  8070281,  9391282, 10722765, 12064878, 13414638, 14770685,
     16129235, 17487915, 18843169, 20192406, 21533274, 22863803, 24183409, 25491319, 26788751, 28076247, 29356438, 30630895],
    // 2075
    [  367050,  1638972,  2914216,  4194699,  5483458,  6781572,  8091034,  9411480, 10743557, 12085151, 13435582, 14791203,
     16150387, 17508780, 18864473, 20213564, 21554605, 22885105, 24204661, 25512613, 26809868, 28097443, 29377435, 30651997],
    // 2076
    [  387996,  1660037,  2935170,  4215781,  5504429,  6802703,  8111995,  9432692, 10764482, 12106463, 13456450, 14812585,
     16171203, 17530161, 18885247, 20234837, 21575309, 22906188, 24225267, 25533515, 26830384, 28118235, 29397901, 30672773],
    // 2077
    [  322080,  1594492,  2869360,  4150381,  5438782,  6737433,  8046496,  9367440, 10699060, 12041077, 13391046, 14746981,
     16105820, 17464401, 18819960, 20169080, 21510160, 22840518, 24160216, 25467924, 26765388, 28052692, 29332923, 30607223],
    // 2078
    [  343460,  1615256,  2890614,  4170979,  5459844,  6757823,  8067336,  9387630, 10719674, 12061142, 13411463, 14767054,
     16126100, 17484626, 18840221, 20189604, 21530591, 22861442, 24180933, 25489200, 26786332, 28074144, 29353935, 30628654],
    // 2079
    [  364384,  1636533,  2911367,  4192079,  5480432,  6778815,  8087818,  9408610, 10740115, 12082166, 13431932, 14788135,
     16146682, 17505726, 18860936, 20210634, 21551389, 22882365, 24201777, 25510049, 26807195, 28094950, 29374771, 30649415],
    // 2080
    [  385153,  1657238,  2932060,  4212724,  5501092,  6799428,  8108545,  9429241, 10761023, 12102844, 13453047, 14808827,
     16167916, 17526393, 18882166, 20231259, 21572521, 22902961, 24222832, 25530690, 26828287, 28115717, 29395999, 30670338],
    // 2081
    [  320137,  1591882,  2867143,  4147408,  5436149,  6734034,  8043414,  9363675, 10695577, 12037098, 13387245, 14742962,
     16101785, 17460465, 18815799, 20165319, 21506053, 22837044, 24156372, 25464846, 26761943, 28050045, 29329882, 30604926],
    // 2082
    [  340695,  1613130,  2887917,  4168809,  5456993,  6755425,  8064166,  9384907, 10716154, 12058104, 13407705, 14763771,
     16122280, 17481153, 18836456, 20185982, 21526934, 22857757, 24177430, 25485582, 26783033, 28070709, 29350871, 30625462],
    // 2083
    [  361546,  1633559,  2908678,  4189190,  5477749,  6775807,  8084992,  9405305, 10737075, 12078506, 13428697, 14784207,
     16143324, 17501716, 18857546, 20206734, 21548048, 22878682, 24198548, 25506600, 26804116, 28091711, 29371879, 30646379],
    // 2084
    [  382478,  1654396,  2929576,  4210021,  5498678,  6796742,  8106003,  9426438, 10758159, 12099844, 13449746, 14805616,
     16164186, 17523012, 18878152, 20227800, 21568431, 22899522, 24218811, 25527331, 26824387, 28112471, 29392239, 30667244],
    // 2085
    [  316549,  1588988,  2863767,  4144745,  5433005,  6731586,  8040475,  9361347, 10692761, 12034719, 13384453, 14740351,
     16098957, 17457546, 18812945, 20162162, 21503225, 22833786, 24153607, 25461587, 26759240, 28046815, 29327204, 30601701],
    // 2086
    [  337992,  1609869,  2885159,  4165499,  5454210,  6752099,  8061434,  9381615, 10713515, 12054859, 13405097, 14760553,
     16119580, 17477955, 18833586, 20182833, 21523926, 22854715, 24174406, 25482709, 26780121, 28068033, 29348129, 30622942],
    // 2087
    [  358931,  1631095,  2906086,  4186696,  5475094,  6773278,  8082251,  9402811, 10734269, 12076124, 13425855, 14781943,
     16140463, 17499478, 18854642, 20204365, 21545044, 22876088, 24195435, 25503838, 26800971, 28088929, 29368797, 30643690],
    // 2088
    [  379496,  1651818,  2926669,  4207499,  5495801,  6794201,  8103148,  9423835, 10755388, 12097193, 13447184, 14802986,
     16161936, 17520475, 18876196, 20225355, 21566617, 22897081, 24216962, 25524804, 26822423, 28109840, 29390179, 30664548],
    // 2089
    [  314450,  1586272,  2861660,  4142009,  5430858,  6728772,  8038201,  9358394, 10690291, 12031665, 13381812, 14737365,
     16096244, 17454803, 18810261, 20159729, 21500623, 22831600, 24151060, 25459501, 26756667, 28044694, 29324555, 30599504],
    // 2090
    [  335301,  1607660,  2882515,  4163372,  5451664,  6750094,  8058942,  9379680, 10710976, 12052906, 13402478, 14758538,
     16116975, 17475906, 18831143, 20180806, 21521728, 22852743, 24172402, 25480738, 26778136, 28065930, 29345964, 30620597],
    // 2091
    [  356491,  1628507,  2903423,  4183956,  5472354,  6770492,  8079584,  9400036, 10731765, 12073343, 13423511, 14779123,
     16138235, 17496677, 18852548, 20201757, 21543176, 22873830, 24193855, 25501929, 26799614, 28087198, 29367483, 30641895],
    // 2092
    [  378024,  1649771,  2924908,  4205134,  5493733,  6791592,  8100851,  9421144, 10752959, 12094574, 13444643, 14800483,
     16159232, 17518045, 18873335, 20222998, 21563744, 22894887, 24214272, 25522879, 26820024, 28108204, 29388036, 30663095],
    // 2093
    [  312400,  1584806,  2859495,  4140346,  5428440,  6726851,  8035549,  9356294, 10687558, 12029512, 13379178, 14735214,
     16093817, 17452625, 18808042, 20157487, 21498563, 22829319, 24149142, 25457280, 26754927, 28042637, 29323012, 30597623],
    // 2094
    [  333869,  1605819,  2880999,  4161340,  5449863,  6747676,  8056774,  9376835, 10708519, 12049760, 13399899, 14755324,
     16114422, 17472842, 18828678, 20177995, 21519340, 22850175, 24170094, 25478391, 26775978, 28063833, 29344060, 30618781],
    // 2095
    [  354876,  1626928,  2902000,  4182464,  5470900,  6768883,  8077837,  9398143, 10729540, 12071135, 13420809, 14776717,
     16135243, 17494239, 18849497, 20199362, 21540184, 22871453, 24190923, 25499543, 26796728, 28084833, 29364666, 30639626],
    // 2096
    [  375333,  1647670,  2922390,  4203212,  5491366,  6789749,  8098520,  9419179, 10750517, 12092289, 13442041, 14797827,
     16156571, 17515150, 18870781, 20220073, 21561394, 22892063, 24212100, 25520153, 26817931, 28105499, 29385923, 30660343],
    // 2097
    [  310227,  1582010,  2857299,  4137555,  5426273,  6724076,  8033384,  9353456, 10685266, 12026497, 13376595, 14731978,
     16090854, 17449239, 18804755, 20154109, 21495153, 22826127, 24145829, 25454358, 26751803, 28039932, 29320034, 30595015],
    // 2098
    [  330954,  1603228,  2878110,  4158775,  5447011,  6745200,  8053967,  9374482, 10705708, 12047474, 13396983, 14752955,
     16111316, 17470229, 18825368, 20175072, 21515900, 22847031, 24166650, 25475185, 26772609, 28060657, 29340744, 30615624],
    // 2099
    [  351528,  1623715,  2898544,  4179135,  5467335,  6765439,  8074265,  9394656, 10726127, 12067679, 13417652, 14773281,
     16132281, 17490752, 18846582, 20195795, 21537217, 22867839, 24187904, 25495950, 26793732, 28081330, 29361767, 30636233],
    // 2100
    [  372532,  1644330,  2919596,  4199810,  5488452,  6786193,  8095409,  9415493, 10747237, 12088615, 13438664, 14794312,
     16153120, 17511816, 18867220, 20216832, 21557690, 22888803, 24208252, 25516820, 26813989, 28102131, 29381988, 30657030],
];
