extern crate container_of;

use container_of::record::{Record, RecordPtr, RecordPtrOps};
use container_of::resolver;
use container_of::{container_of, offset_of};

fn report(strategy: &str, rec: RecordPtr) {
    println!("\n{}", strategy);
    println!("a: {}", rec.a());
    println!("b: {}", rec.b());
    println!("c: '{}'", rec.c() as char);
    println!("d: {}", rec.d());
    println!("record base addr {:p}", rec);
}

fn main() {
    let data = Record {
        a: 100,
        b: 200,
        c: b'a',
        d: 400,
    };

    println!("source record");
    println!("a: {}", data.a);
    println!("b: {}", data.b);
    println!("c: '{}'", data.c as char);
    println!("d: {}", data.d);
    println!("record base addr {:p}", &data);

    println!(
        "\noffset of c: instance {}, null base {}, static query {}",
        resolver::c_offset_by_instance(),
        unsafe { offset_of!(Record, c) },
        resolver::c_offset_static()
    );

    // walk back to the record from the address of an interior field
    report("instance offset, from &data.c", unsafe {
        resolver::record_of_c_by_instance(&data.c)
    });
    report("null base offset, from &data.c", unsafe {
        resolver::record_of_c_by_null_base(&data.c)
    });
    report(
        "container_of macro, from &data.b",
        container_of!(&data.b, Record, b),
    );
}
