use super::NameDayMap;
use phf::phf_map;

pub(super) static POLISH: NameDayMap = phf_map! {
    "01-01" => &["Mieszko", "Marian"],
    "01-02" => &["Izydor", "Bazyli", "Grzegorz"],
    "01-03" => &["Danuta", "Genowefa", "Arleta"],
    "01-04" => &["Angelika", "Elżbieta", "Tytus"],
    "01-05" => &["Szymon", "Edward", "Hanna"],
    "01-06" => &["Kacper", "Melchior", "Baltazar"],
    "01-07" => &["Lucjan", "Julian", "Rajmund"],
    "01-08" => &["Seweryn", "Mścisław", "Juliusz"],
    "01-09" => &["Marcelina", "Marian", "Julian"],
    "01-10" => &["Wilhelm", "Danuta", "Jan"],
    "01-11" => &["Honorata", "Teodozjusz", "Matylda"],
    "01-12" => &["Arkadiusz", "Benedykt", "Czesław"],
    "01-13" => &["Weronika", "Bogumił", "Hilary"],
    "01-14" => &["Feliks", "Nina", "Odo"],
    "01-15" => &["Paweł", "Arnold", "Dobrosław"],
    "01-16" => &["Marceli", "Włodzimierz", "Waleria"],
    "01-17" => &["Antoni", "Jan", "Rościsław"],
    "01-18" => &["Małgorzata", "Piotr", "Jaropełk"],
    "01-19" => &["Henryk", "Mariusz", "Marta"],
    "01-20" => &["Fabian", "Sebastian"],
    "01-21" => &["Agnieszka", "Jarosław", "Epifaniusz"],
    "01-22" => &["Anastazy", "Wincenty", "Dorian"],
    "01-23" => &["Ildefons", "Rajmund", "Emerencja"],
    "01-24" => &["Felicja", "Franciszek", "Rafał"],
    "01-25" => &["Paweł", "Miłosz", "Tatiana"],
    "01-26" => &["Tymoteusz", "Michał", "Paula"],
    "01-27" => &["Aniela", "Jerzy", "Przybysław"],
    "01-28" => &["Tomasz", "Agnieszka", "Radomir"],
    "01-29" => &["Franciszek", "Zdzisław", "Walerian"],
    "01-30" => &["Maciej", "Martyna", "Sebastian"],
    "01-31" => &["Jan", "Marceli", "Ludwika"],
    "02-01" => &["Brygida", "Ignacy", "Dobrogniew"],
    "02-02" => &["Maria", "Mirosław", "Joanna"],
    "02-03" => &["Błażej", "Oskar", "Hipolit"],
    "02-04" => &["Andrzej", "Weronika", "Joanna"],
    "02-05" => &["Agata", "Adelajda", "Jakub"],
    "02-06" => &["Dorota", "Bohdan", "Paweł"],
    "02-07" => &["Ryszard", "Romuald", "Teodor"],
    "02-08" => &["Hieronim", "Sebastian", "Paweł"],
    "02-09" => &["Apolonia", "Eryk", "Cyryl"],
    "02-10" => &["Elwira", "Jacek", "Scholastyka"],
    "02-11" => &["Lucjan", "Olgierd", "Grzegorz"],
    "02-12" => &["Eulalia", "Radosław", "Modest"],
    "02-13" => &["Grzegorz", "Katarzyna", "Jordan"],
    "02-14" => &["Walenty", "Cyryl", "Metody"],
    "02-15" => &["Jowita", "Zygfryd", "Faustyn"],
    "02-16" => &["Danuta", "Julianna", "Daniel"],
    "02-17" => &["Aleksy", "Zbigniew", "Łukasz"],
    "02-18" => &["Szymon", "Konstancja", "Albert"],
    "02-19" => &["Arnold", "Konrad", "Marcelina"],
    "02-20" => &["Leon", "Ludmiła", "Zenobiusz"],
    "02-21" => &["Eleonora", "Fortunat", "Kiejstut"],
    "02-22" => &["Małgorzata", "Marta", "Wiktor"],
    "02-23" => &["Romana", "Damian", "Piotr"],
    "02-24" => &["Maciej", "Bogusz", "Sergiusz"],
    "02-25" => &["Wiktor", "Cezary", "Wiktoria"],
    "02-26" => &["Mirosław", "Aleksander", "Porfiriusz"],
    "02-27" => &["Gabriel", "Anastazja", "Leander"],
    "02-28" => &["Roman", "Makary", "Lutosław"],
    "02-29" => &["Roman", "Dobronieg", "Lutomir"],
    "03-01" => &["Albin", "Antonina", "Radosław"],
    "03-02" => &["Helena", "Halszka", "Heradiusz"],
    "03-03" => &["Maryna", "Kunegunda", "Tycjan"],
    "03-04" => &["Kazimierz", "Łucja", "Adrian"],
    "03-05" => &["Adrian", "Fryderyk", "Teofil"],
    "03-06" => &["Róża", "Wiktor", "Jordan"],
    "03-07" => &["Tomasz", "Felicyta", "Paweł"],
    "03-08" => &["Beata", "Wincenty", "Jan"],
    "03-09" => &["Franciszka", "Dominik", "Katarzyna"],
    "03-10" => &["Cyprian", "Aleksander", "Marcel"],
    "03-11" => &["Benedykt", "Konstanty", "Ludosław"],
    "03-12" => &["Bernard", "Grzegorz", "Józefina"],
    "03-13" => &["Bożena", "Krystyna", "Ernest"],
    "03-14" => &["Leon", "Matylda", "Łazarz"],
    "03-15" => &["Longin", "Klemens", "Ludwika"],
    "03-16" => &["Izabela", "Oktawia", "Hilary"],
    "03-17" => &["Patryk", "Zbigniew", "Gertruda"],
    "03-18" => &["Cyryl", "Edward", "Aleksander"],
    "03-19" => &["Józef", "Bogdan"],
    "03-20" => &["Klaudia", "Aleksandra", "Eufemia"],
    "03-21" => &["Ludwika", "Benedykt", "Lubomir"],
    "03-22" => &["Bogusław", "Katarzyna", "Paweł"],
    "03-23" => &["Pelagia", "Feliks", "Oktawian"],
    "03-24" => &["Marek", "Gabriel", "Katarzyna"],
    "03-25" => &["Maria", "Wieńczysław", "Ireneusz"],
    "03-26" => &["Teodor", "Emanuel", "Larysa"],
    "03-27" => &["Lidia", "Ernest", "Ernestyna"],
    "03-28" => &["Aniela", "Sykstus", "Jan"],
    "03-29" => &["Wiktoryn", "Helmut", "Eustachy"],
    "03-30" => &["Amelia", "Leonard", "Dobromir"],
    "03-31" => &["Beniamin", "Dobromira", "Gwidon"],
    "04-01" => &["Grażyna", "Irena", "Hugo"],
    "04-02" => &["Franciszek", "Władysław", "Teodozja"],
    "04-03" => &["Ryszard", "Pankracy", "Cieszysław"],
    "04-04" => &["Izydor", "Wacław", "Benedykt"],
    "04-05" => &["Irena", "Wincenty", "Katarzyna"],
    "04-06" => &["Ireneusz", "Wilhelm", "Celestyn"],
    "04-07" => &["Rufin", "Donat", "Herman"],
    "04-08" => &["Cezaria", "Dionizy", "Julia"],
    "04-09" => &["Maja", "Mariusz", "Dymitr"],
    "04-10" => &["Michał", "Makary", "Daniel"],
    "04-11" => &["Filip", "Leon", "Stanisław"],
    "04-12" => &["Juliusz", "Wiktor", "Zenon"],
    "04-13" => &["Przemysław", "Ida", "Marcin"],
    "04-14" => &["Waleriana", "Justyn", "Tyburcjusz"],
    "04-15" => &["Olimpia", "Anastazja", "Wiktor"],
    "04-16" => &["Kacper", "Benedykt", "Julia"],
    "04-17" => &["Rudolf", "Robert", "Anicet"],
    "04-18" => &["Bogusław", "Apoloniusz", "Flawiusz"],
    "04-19" => &["Adolf", "Tymon", "Leon"],
    "04-20" => &["Czesław", "Agnieszka", "Mariana"],
    "04-21" => &["Anzelm", "Bartosz", "Feliks"],
    "04-22" => &["Kajus", "Leon", "Łukasz"],
    "04-23" => &["Wojciech", "Jerzy", "Idzi"],
    "04-24" => &["Grzegorz", "Aleksander", "Horacy"],
    "04-25" => &["Marek", "Jarosław", "Wasyl"],
    "04-26" => &["Marzena", "Klaudiusz", "Marcelin"],
    "04-27" => &["Zyta", "Teofil", "Piotr"],
    "04-28" => &["Paweł", "Waleria", "Witalis"],
    "04-29" => &["Piotr", "Katarzyna", "Robert"],
    "04-30" => &["Marian", "Katarzyna", "Jakub"],
    "05-01" => &["Józef", "Filip", "Jeremiasz"],
    "05-02" => &["Zygmunt", "Atanazy", "Walter"],
    "05-03" => &["Maria", "Antonina", "Aleksander"],
    "05-04" => &["Monika", "Florian", "Grzegorz"],
    "05-05" => &["Irena", "Waldemar", "Pius"],
    "05-06" => &["Jan", "Judyta", "Filip"],
    "05-07" => &["Gizela", "Ludmiła", "Benedykt"],
    "05-08" => &["Stanisław", "Wiktor", "Dezyderiusz"],
    "05-09" => &["Grzegorz", "Karolina", "Bożydar"],
    "05-10" => &["Izydor", "Antonin", "Częstomir"],
    "05-11" => &["Franciszek", "Ignacy", "Mamert"],
    "05-12" => &["Pankracy", "Dominik", "Achilles"],
    "05-13" => &["Serwacy", "Gloria", "Robert"],
    "05-14" => &["Bonifacy", "Maciej", "Dobiesław"],
    "05-15" => &["Zofia", "Nadzieja", "Izydor"],
    "05-16" => &["Andrzej", "Jędrzej", "Szymon"],
    "05-17" => &["Paschalis", "Weronika", "Sławomir"],
    "05-18" => &["Eryk", "Feliks", "Aleksandra"],
    "05-19" => &["Iwo", "Piotr", "Mikołaj"],
    "05-20" => &["Bernardyn", "Aleksander", "Bazyli"],
    "05-21" => &["Wiktor", "Kryspin", "Jan"],
    "05-22" => &["Julia", "Helena", "Wiesław"],
    "05-23" => &["Iwona", "Dezydery", "Michał"],
    "05-24" => &["Joanna", "Zuzanna", "Estera"],
    "05-25" => &["Grzegorz", "Urban", "Magdalena"],
    "05-26" => &["Filip", "Paulina", "Marianna"],
    "05-27" => &["Jan", "Juliusz", "Augustyn"],
    "05-28" => &["Jaromir", "Augustyn", "Wiktor"],
    "05-29" => &["Magdalena", "Bogusława", "Maksymilian"],
    "05-30" => &["Feliks", "Joanna", "Ferdynand"],
    "05-31" => &["Aniela", "Petronela", "Kamila"],
    "06-01" => &["Justyn", "Konrad", "Jakub"],
    "06-02" => &["Marianna", "Erazm", "Marcelin"],
    "06-03" => &["Leszek", "Tamara", "Karol"],
    "06-04" => &["Franciszek", "Karol", "Kwiryna"],
    "06-05" => &["Walter", "Bonifacy", "Waleria"],
    "06-06" => &["Norbert", "Laurenty", "Klaudiusz"],
    "06-07" => &["Robert", "Wiesław", "Lukrecja"],
    "06-08" => &["Medard", "Maksym", "Seweryn"],
    "06-09" => &["Pelagia", "Felicjan", "Dominik"],
    "06-10" => &["Bogumił", "Małgorzata", "Diana"],
    "06-11" => &["Barnaba", "Radomił", "Feliks"],
    "06-12" => &["Janina", "Jan", "Onufry"],
    "06-13" => &["Antoni", "Lucjan", "Chociemir"],
    "06-14" => &["Bazyli", "Elwira", "Michał"],
    "06-15" => &["Wit", "Jolanta", "Witold"],
    "06-16" => &["Alina", "Benon", "Justyna"],
    "06-17" => &["Laura", "Marcjan", "Adolf"],
    "06-18" => &["Elżbieta", "Marek", "Paula"],
    "06-19" => &["Gerwazy", "Protazy", "Julianna"],
    "06-20" => &["Bogna", "Florentyna", "Rafał"],
    "06-21" => &["Alicja", "Alojzy", "Marta"],
    "06-22" => &["Paulina", "Tomasz", "Flawiusz"],
    "06-23" => &["Wanda", "Zenon", "Agrypina"],
    "06-24" => &["Jan", "Danuta", "Janina"],
    "06-25" => &["Łucja", "Wilhelm", "Dorota"],
    "06-26" => &["Jan", "Paweł", "Rudolf"],
    "06-27" => &["Władysław", "Maryla", "Cyryl"],
    "06-28" => &["Leon", "Ireneusz", "Paweł"],
    "06-29" => &["Piotr", "Paweł", "Benita"],
    "06-30" => &["Emilia", "Lucyna", "Arnold"],
    "07-01" => &["Halina", "Marian", "Teobald"],
    "07-02" => &["Jagoda", "Urban", "Maria"],
    "07-03" => &["Tomasz", "Jacek", "Anatol"],
    "07-04" => &["Odo", "Malwina", "Innocenty"],
    "07-05" => &["Antoni", "Karolina", "Wilhelm"],
    "07-06" => &["Dominika", "Gotard", "Łucja"],
    "07-07" => &["Cyryl", "Estera", "Metody"],
    "07-08" => &["Edgar", "Elżbieta", "Eugeniusz"],
    "07-09" => &["Weronika", "Zenon", "Lukrecja"],
    "07-10" => &["Filip", "Amelia", "Sylwana"],
    "07-11" => &["Olga", "Kalina", "Benedykt"],
    "07-12" => &["Jan", "Brunon", "Henryk"],
    "07-13" => &["Małgorzata", "Ernest", "Irwin"],
    "07-14" => &["Bonawentura", "Kamil", "Stella"],
    "07-15" => &["Henryk", "Włodzimierz", "Dawid"],
    "07-16" => &["Maria", "Eustachy", "Marika"],
    "07-17" => &["Aleksy", "Bogdan", "Andrzej"],
    "07-18" => &["Kamil", "Szymon", "Erwin"],
    "07-19" => &["Wincenty", "Alfred", "Wodzisław"],
    "07-20" => &["Czesław", "Hieronim", "Eliasz"],
    "07-21" => &["Daniel", "Wiktor", "Andrzej"],
    "07-22" => &["Magdalena", "Bolesław", "Teofil"],
    "07-23" => &["Bogna", "Żelisław", "Apolinary"],
    "07-24" => &["Kinga", "Krystyna", "Olga"],
    "07-25" => &["Jakub", "Krzysztof", "Walenty"],
    "07-26" => &["Anna", "Mirosława", "Grażyna"],
    "07-27" => &["Lilia", "Julia", "Natalia"],
    "07-28" => &["Innocenty", "Wiktor", "Aida"],
    "07-29" => &["Marta", "Olaf", "Beatrycze"],
    "07-30" => &["Julita", "Piotr", "Ludmiła"],
    "07-31" => &["Ignacy", "Lubomir", "Helena"],
    "08-01" => &["Piotr", "Nadia", "Justyn"],
    "08-02" => &["Karina", "Gustaw", "Euzebiusz"],
    "08-03" => &["Lidia", "Nikodem", "August"],
    "08-04" => &["Dominik", "Jan", "Protazy"],
    "08-05" => &["Oswald", "Maria", "Karolina"],
    "08-06" => &["Sława", "Wincenty", "Jakub"],
    "08-07" => &["Kajetan", "Sykstus", "Donat"],
    "08-08" => &["Cyprian", "Dominik", "Emil"],
    "08-09" => &["Roman", "Klara", "Romuald"],
    "08-10" => &["Borys", "Wawrzyniec", "Bogdan"],
    "08-11" => &["Zuzanna", "Klara", "Lukrecja"],
    "08-12" => &["Klara", "Hilaria", "Innocenty"],
    "08-13" => &["Diana", "Hipolit", "Helena"],
    "08-14" => &["Alfred", "Euzebiusz", "Maksymilian"],
    "08-15" => &["Maria", "Napoleon", "Stefan"],
    "08-16" => &["Roch", "Stefan", "Joachim"],
    "08-17" => &["Anita", "Eliza", "Jacek"],
    "08-18" => &["Ilona", "Bronisław", "Helena"],
    "08-19" => &["Bolesław", "Julian", "Jan"],
    "08-20" => &["Bernard", "Sobiesław", "Samuel"],
    "08-21" => &["Joanna", "Kazimiera", "Franciszek"],
    "08-22" => &["Cezary", "Tymoteusz", "Zygfryd"],
    "08-23" => &["Filip", "Apolinary", "Róża"],
    "08-24" => &["Bartłomiej", "Jerzy", "Malina"],
    "08-25" => &["Ludwik", "Luiza", "Józef"],
    "08-26" => &["Maria", "Zefiryn", "Joanna"],
    "08-27" => &["Józef", "Cezary", "Monika"],
    "08-28" => &["Augustyn", "Patrycja", "Aleksander"],
    "08-29" => &["Jan", "Sabina", "Flora"],
    "08-30" => &["Róża", "Szczęsny", "Feliks"],
    "08-31" => &["Rajmund", "Bohdan", "Paulina"],
    "09-01" => &["Idzi", "Bronisław", "Bronisława"],
    "09-02" => &["Stefan", "Wanda", "Julian"],
    "09-03" => &["Izabela", "Szymon", "Grzegorz"],
    "09-04" => &["Rozalia", "Róża", "Ida"],
    "09-05" => &["Dorota", "Wawrzyniec", "Teodor"],
    "09-06" => &["Beata", "Eugeniusz", "Zachariasz"],
    "09-07" => &["Regina", "Melchior", "Domasław"],
    "09-08" => &["Maria", "Adrian", "Serafina"],
    "09-09" => &["Piotr", "Sergiusz", "Aureli"],
    "09-10" => &["Łukasz", "Aldona", "Mikołaj"],
    "09-11" => &["Jacek", "Feliks", "Prot"],
    "09-12" => &["Gwidon", "Radzimir", "Maria"],
    "09-13" => &["Eugenia", "Aureliusz", "Jan"],
    "09-14" => &["Cyprian", "Roksana", "Bernard"],
    "09-15" => &["Albin", "Nikodem", "Maria"],
    "09-16" => &["Edyta", "Kornel", "Cyprian"],
    "09-17" => &["Franciszek", "Hildegarda", "Robert"],
    "09-18" => &["Irma", "Józef", "Ryszarda"],
    "09-19" => &["Konstancja", "Teodor", "January"],
    "09-20" => &["Filipina", "Eustachy", "Fausta"],
    "09-21" => &["Hipolit", "Jonasz", "Mateusz"],
    "09-22" => &["Tomasz", "Maurycy", "Joachim"],
    "09-23" => &["Bogusław", "Tekla", "Linus"],
    "09-24" => &["Gerard", "Teodor", "Maria"],
    "09-25" => &["Aurelia", "Władysław", "Kleofas"],
    "09-26" => &["Wawrzyniec", "Justyna", "Cyprian"],
    "09-27" => &["Wincenty", "Kosma", "Damian"],
    "09-28" => &["Wacław", "Marek", "Salomon"],
    "09-29" => &["Michał", "Gabriel", "Rafał"],
    "09-30" => &["Wera", "Honoriusz", "Hieronim"],
    "10-01" => &["Danuta", "Remigiusz", "Teresa"],
    "10-02" => &["Teofil", "Dionizy", "Trofim"],
    "10-03" => &["Teresa", "Heliodor", "Józefa"],
    "10-04" => &["Rozalia", "Edwin", "Franciszek"],
    "10-05" => &["Apolinary", "Placyd", "Flawia"],
    "10-06" => &["Artur", "Brunon", "Fryderyka"],
    "10-07" => &["Maria", "Marek", "Mirela"],
    "10-08" => &["Pelagia", "Brygida", "Marcin"],
    "10-09" => &["Arnold", "Dionizy", "Ludwik"],
    "10-10" => &["Paulina", "Daniel", "Franciszek"],
    "10-11" => &["Aldona", "Emil", "Maria"],
    "10-12" => &["Maksymilian", "Eustachy", "Serafin"],
    "10-13" => &["Edward", "Mikołaj", "Teofil"],
    "10-14" => &["Alan", "Kalikst", "Dominik"],
    "10-15" => &["Teresa", "Jadwiga", "Sewer"],
    "10-16" => &["Gaweł", "Ambroży", "Jadwiga"],
    "10-17" => &["Wiktor", "Marian", "Ignacy"],
    "10-18" => &["Łukasz", "Julian", "Klemens"],
    "10-19" => &["Ziemowit", "Pelagia", "Piotr"],
    "10-20" => &["Irena", "Kleopatra", "Jan"],
    "10-21" => &["Urszula", "Hilary", "Jakub"],
    "10-22" => &["Halka", "Kordula", "Przybysław"],
    "10-23" => &["Seweryn", "Marlena", "Roman"],
    "10-24" => &["Marcin", "Rafał", "Antoni"],
    "10-25" => &["Daria", "Wilhelmina", "Kryspin"],
    "10-26" => &["Lucyna", "Ewaryst", "Łucjan"],
    "10-27" => &["Iwona", "Sabina", "Wincenty"],
    "10-28" => &["Szymon", "Juda", "Tadeusz"],
    "10-29" => &["Euzebia", "Wioletta", "Narcyz"],
    "10-30" => &["Zenobia", "Przemysław", "Edmund"],
    "10-31" => &["Urban", "Saturnin", "Krzysztof"],
    "11-01" => &["Seweryna", "Konradyn", "Wiktoryna"],
    "11-02" => &["Bohdana", "Tobiasz", "Małgorzata"],
    "11-03" => &["Sylwia", "Hubert", "Marcin"],
    "11-04" => &["Karol", "Olgierd", "Modesta"],
    "11-05" => &["Elżbieta", "Sławomir", "Dominik"],
    "11-06" => &["Feliks", "Leonard", "Ziemowit"],
    "11-07" => &["Antoni", "Ernest", "Florentyn"],
    "11-08" => &["Sewer", "Hadrian", "Klaudiusz"],
    "11-09" => &["Aleksander", "Ludwik", "Teodor"],
    "11-10" => &["Leon", "Lena", "Ludomir"],
    "11-11" => &["Marcin", "Bartłomiej", "Anastazja"],
    "11-12" => &["Renata", "Witold", "Jozafat"],
    "11-13" => &["Mikołaj", "Stanisław", "Arkadiusz"],
    "11-14" => &["Emil", "Serafin", "Ludwik"],
    "11-15" => &["Albert", "Leopold", "Artur"],
    "11-16" => &["Gertruda", "Edmund", "Marek"],
    "11-17" => &["Salomea", "Grzegorz", "Elżbieta"],
    "11-18" => &["Roman", "Klaudyna", "Otto"],
    "11-19" => &["Seweryn", "Elżbieta", "Paweł"],
    "11-20" => &["Edmund", "Feliks", "Anatol"],
    "11-21" => &["Janusz", "Konrad", "Albert"],
    "11-22" => &["Cecylia", "Wszemiła", "Stefan"],
    "11-23" => &["Adela", "Klemens", "Felicyta"],
    "11-24" => &["Flora", "Emma", "Jan"],
    "11-25" => &["Katarzyna", "Erazm", "Klemens"],
    "11-26" => &["Delfina", "Sylwester", "Konrad"],
    "11-27" => &["Walery", "Wirgiliusz", "Ksenia"],
    "11-28" => &["Lesław", "Zdzisław", "Stefan"],
    "11-29" => &["Błażej", "Saturnin", "Fryderyk"],
    "11-30" => &["Andrzej", "Justyna", "Konstanty"],
    "12-01" => &["Natalia", "Eligiusz", "Edmund"],
    "12-02" => &["Balbina", "Paulina", "Wiktoria"],
    "12-03" => &["Franciszek", "Ksawery", "Kasjan"],
    "12-04" => &["Barbara", "Krystian", "Piotr"],
    "12-05" => &["Saba", "Kryspina", "Pęcisław"],
    "12-06" => &["Mikołaj", "Jarema", "Emilian"],
    "12-07" => &["Marcin", "Ambroży", "Józefa"],
    "12-08" => &["Maria", "Wirginia", "Światozar"],
    "12-09" => &["Wiesław", "Leokadia", "Joanna"],
    "12-10" => &["Julia", "Daniela", "Maria"],
    "12-11" => &["Stefan", "Waldemar", "Damazy"],
    "12-12" => &["Joanna", "Aleksander", "Ada"],
    "12-13" => &["Łucja", "Otylia", "Aleksander"],
    "12-14" => &["Alfred", "Izydor", "Jan"],
    "12-15" => &["Nina", "Celina", "Walerian"],
    "12-16" => &["Albina", "Zdzisława", "Euzebiusz"],
    "12-17" => &["Olimpia", "Łazarz", "Florian"],
    "12-18" => &["Gracjan", "Bogusław", "Laurencja"],
    "12-19" => &["Urban", "Dariusz", "Mścisław"],
    "12-20" => &["Bogumiła", "Dominik", "Zefiryn"],
    "12-21" => &["Tomasz", "Piotr", "Tomisław"],
    "12-22" => &["Zenon", "Honorata", "Franciszka"],
    "12-23" => &["Wiktoria", "Sławomira", "Iwona"],
    "12-24" => &["Adam", "Ewa", "Irmina"],
    "12-25" => &["Anastazja", "Eugenia", "Piotr"],
    "12-26" => &["Szczepan", "Dionizy", "Stefan"],
    "12-27" => &["Jan", "Fabiola", "Żaneta"],
    "12-28" => &["Teofila", "Antoni", "Dawid"],
    "12-29" => &["Dawid", "Tomasz", "Dominik"],
    "12-30" => &["Sabin", "Eugeniusz", "Irmina"],
    "12-31" => &["Sylwester", "Melania", "Mariusz"],
};
